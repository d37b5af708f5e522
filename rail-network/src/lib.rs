//! Rail network journey planner and fare engine.
//!
//! Loads a list of stations tagged with regions and hub flags, and answers:
//! which regions and hubs exist, which hubs a journey between two stations
//! routes through, and what that journey costs.

pub mod config;
pub mod domain;
pub mod loader;
pub mod network;
pub mod web;
