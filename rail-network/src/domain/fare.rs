//! Per-leg fare pricing.

use super::FareError;

/// Price a single leg of a journey.
///
/// `different_regions` is a 0/1 flag: 1 when the leg crosses into another
/// region. Crossing into a region with more hubs costs more. The distance
/// term decays exponentially, so very long legs tend back towards the base
/// fare of 1.
///
/// ```text
/// fare = 1 + d · e^(-d/100) · (1 + different_regions · hubs_in_dest_region / 10)
/// ```
///
/// # Examples
///
/// ```
/// use rail_network::domain::fare_price;
///
/// let fare = fare_price(1.0, 0, 0).unwrap();
/// assert_eq!(format!("{fare:.2}"), "1.99");
///
/// assert!(fare_price(1.0, 2, 0).is_err());
/// ```
pub fn fare_price(
    distance: f64,
    different_regions: u32,
    hubs_in_dest_region: usize,
) -> Result<f64, FareError> {
    if different_regions > 1 {
        return Err(FareError::InvalidRegionFlag(different_regions));
    }

    let hub_factor = 1.0 + (different_regions as f64 * hubs_in_dest_region as f64) / 10.0;
    Ok(1.0 + distance * (-distance / 100.0).exp() * hub_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_kilometre_same_region() {
        let fare = fare_price(1.0, 0, 0).unwrap();
        assert!((fare - 1.990_049_833_749_168).abs() < 1e-12);
        assert_eq!(format!("{fare:.2}"), "1.99");
    }

    #[test]
    fn zero_distance_is_base_fare() {
        assert_eq!(fare_price(0.0, 0, 0).unwrap(), 1.0);
        assert_eq!(fare_price(0.0, 1, 5).unwrap(), 1.0);
    }

    #[test]
    fn hubs_only_count_across_regions() {
        let same = fare_price(50.0, 0, 4).unwrap();
        let none = fare_price(50.0, 0, 0).unwrap();
        assert_eq!(same, none);

        let cross = fare_price(50.0, 1, 4).unwrap();
        // 1 + 50·e^-0.5·1.4
        let expected = 1.0 + 50.0 * (-0.5f64).exp() * 1.4;
        assert!((cross - expected).abs() < 1e-12);
        assert!(cross > same);
    }

    #[test]
    fn peaks_at_one_hundred_km() {
        let peak = fare_price(100.0, 0, 0).unwrap();
        assert!(fare_price(90.0, 0, 0).unwrap() < peak);
        assert!(fare_price(110.0, 0, 0).unwrap() < peak);
    }

    #[test]
    fn long_distances_decay_to_base() {
        let fare = fare_price(10_000.0, 1, 3).unwrap();
        assert!((fare - 1.0).abs() < 1e-30);
    }

    #[test]
    fn reject_region_flag_above_one() {
        assert_eq!(
            fare_price(10.0, 2, 0).unwrap_err(),
            FareError::InvalidRegionFlag(2)
        );
        assert!(fare_price(10.0, 10, 1).is_err());
    }
}
