//! Camera capture for the posture monitor.
//!
//! Provides the `Camera` trait for async frame capture and a V4L2 backend
//! that opens webcams by index, plus a wrapper that reopens a lost camera.

pub mod config;
pub mod error;
pub mod reconnect;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use reconnect::ReconnectingCamera;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
