//! HTTP API handlers for wordpose

pub mod health;
pub mod keypoints;

pub use health::health_routes;
pub use keypoints::get_keypoints;
