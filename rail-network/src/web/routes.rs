//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::network::NetworkError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/regions", get(regions))
        .route("/hubs", get(all_hubs))
        .route("/hubs/:region", get(region_hubs))
        .route("/stations/:crs/closest-hub", get(closest_hub))
        .route("/journey/plan", get(plan_journey))
        .route("/journey/fare", get(journey_fare))
        .route("/fares/to/:crs", get(fares_to))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn regions(State(state): State<AppState>) -> Json<RegionsResponse> {
    let network = &state.network;
    Json(RegionsResponse {
        regions: network.regions().into_iter().map(str::to_string).collect(),
        n_stations: network.n_stations(),
    })
}

async fn all_hubs(State(state): State<AppState>) -> Json<HubsResponse> {
    let hubs = state
        .network
        .hub_stations_by_region()
        .into_iter()
        .map(|(region, hubs)| {
            let hubs: Vec<StationResult> =
                hubs.into_iter().map(StationResult::from_station).collect();
            (region.to_string(), hubs)
        })
        .collect();

    Json(HubsResponse { hubs })
}

async fn region_hubs(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<RegionHubsResponse>, AppError> {
    let hubs = state
        .network
        .hub_stations(&region)?
        .into_iter()
        .map(StationResult::from_station)
        .collect();

    Ok(Json(RegionHubsResponse { region, hubs }))
}

async fn closest_hub(
    State(state): State<AppState>,
    Path(crs): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    let station = state.network.station(&crs)?;
    let hub = state.network.closest_hub(station)?;
    Ok(Json(StationResult::from_station(hub)))
}

async fn plan_journey(
    State(state): State<AppState>,
    Query(req): Query<JourneyQuery>,
) -> Result<Json<JourneyResponse>, AppError> {
    let journey = state.network.journey_planner(&req.from, &req.to)?;
    Ok(Json(JourneyResponse::from_journey(&journey)))
}

async fn journey_fare(
    State(state): State<AppState>,
    Query(req): Query<FareQuery>,
) -> Result<Json<FareResponse>, AppError> {
    let response = if req.summary {
        let summary = state.network.journey_fare_summary(&req.from, &req.to)?;
        FareResponse {
            fare: summary.fare,
            summary: Some(summary.to_string()),
        }
    } else {
        FareResponse {
            fare: state.network.journey_fare(&req.from, &req.to)?,
            summary: None,
        }
    };

    Ok(Json(response))
}

async fn fares_to(
    State(state): State<AppState>,
    Path(crs): Path<String>,
) -> Result<Json<FaresToResponse>, AppError> {
    let fares = state.network.fares_to(&crs)?;
    Ok(Json(FaresToResponse {
        destination: crs,
        fares,
    }))
}

/// Application error type.
#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::InvalidCrs(_) => AppError::BadRequest { message },
            NetworkError::UnknownStation(_) | NetworkError::RegionNotFound(_) => {
                AppError::NotFound { message }
            }
            NetworkError::DuplicateCrs(_) | NetworkError::Fare(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Crs, Station};
    use crate::network::RailNetwork;

    fn state() -> AppState {
        let network = RailNetwork::new(vec![
            Station::new("Abbey Wood", "London", "ABW", 51.4907, 0.1203, 0).unwrap(),
            Station::new("Aberdeen", "Scotland", "ABD", 57.1437, -2.0981, 1).unwrap(),
            Station::new("Kirkcaldy", "Scotland", "KDY", 56.1121, -3.1672, 0).unwrap(),
            Station::new("Kings Cross", "London", "KGX", 51.5308, -0.1238, 1).unwrap(),
            Station::new("Ystrad Rhondda", "Wales", "YSR", 51.6435, -3.4669, 0).unwrap(),
        ])
        .unwrap();
        AppState::new(network)
    }

    fn journey(from: &str, to: &str) -> Query<JourneyQuery> {
        Query(JourneyQuery {
            from: from.into(),
            to: to.into(),
        })
    }

    #[tokio::test]
    async fn regions_lists_all() {
        let Json(resp) = regions(State(state())).await;
        assert_eq!(resp.regions, vec!["London", "Scotland", "Wales"]);
        assert_eq!(resp.n_stations, 5);
    }

    #[tokio::test]
    async fn all_hubs_skips_hubless_regions() {
        let Json(resp) = all_hubs(State(state())).await;
        assert_eq!(resp.hubs.len(), 2);
        assert_eq!(resp.hubs["London"][0].crs, "KGX");
        assert!(!resp.hubs.contains_key("Wales"));
    }

    #[tokio::test]
    async fn region_hubs_not_found() {
        let err = region_hubs(State(state()), Path("Wales".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn closest_hub_of_station() {
        let Json(hub) = closest_hub(State(state()), Path("KDY".into()))
            .await
            .unwrap();
        assert_eq!(hub.crs, "ABD");
    }

    #[tokio::test]
    async fn plan_hub_to_hub() {
        let Json(resp) = plan_journey(State(state()), journey("KDY", "ABW"))
            .await
            .unwrap();
        let codes: Vec<&str> = resp.stations.iter().map(|s| s.crs.as_str()).collect();
        assert_eq!(codes, vec!["KDY", "ABD", "KGX", "ABW"]);
        assert_eq!(resp.route, "KDY -> Aberdeen (ABD) -> Kings Cross (KGX) -> ABW");
    }

    #[tokio::test]
    async fn plan_bad_code_is_bad_request() {
        let err = plan_journey(State(state()), journey("KINGS", "ABW"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn fare_with_and_without_summary() {
        let state = state();

        let Json(plain) = journey_fare(
            State(state.clone()),
            Query(FareQuery {
                from: "KDY".into(),
                to: "ABW".into(),
                summary: false,
            }),
        )
        .await
        .unwrap();
        assert!(plain.summary.is_none());

        let Json(full) = journey_fare(
            State(state),
            Query(FareQuery {
                from: "KDY".into(),
                to: "ABW".into(),
                summary: true,
            }),
        )
        .await
        .unwrap();
        assert_eq!(full.fare, plain.fare);
        assert!(
            full.summary
                .unwrap()
                .starts_with("Journey from: Kirkcaldy (KDY) to Abbey Wood (ABW)\n")
        );
    }

    #[tokio::test]
    async fn fares_to_destination() {
        let Json(resp) = fares_to(State(state()), Path("ABW".into())).await.unwrap();
        assert_eq!(resp.destination, "ABW");
        // ABD, KDY, KGX; YSR has no hub to leave from
        assert_eq!(resp.fares.len(), 3);
    }

    #[test]
    fn network_errors_map_to_statuses() {
        let crs = Crs::parse("ZZZ").unwrap();
        assert!(matches!(
            AppError::from(NetworkError::UnknownStation(crs)),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            AppError::from(NetworkError::DuplicateCrs(crs)),
            AppError::Internal { .. }
        ));

        let response = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
