//! Posture analysis: from body landmarks to a GOOD/POOR verdict, corrective
//! guidance and a one-shot audible alert.

pub mod alert;
pub mod angles;
pub mod classifier;
pub mod guidance;
pub mod landmark;
pub mod monitor;
pub mod settings;

pub use alert::AlertLatch;
pub use angles::{AngleMeasurement, InvalidAngle, Side, compute_angles, select_side};
pub use classifier::{PostureState, Thresholds, Verdict, classify};
pub use guidance::{GuidanceMessage, guidance};
pub use landmark::{Landmark, LandmarkId, LandmarkProvider, Landmarks};
pub use monitor::{FrameReport, Monitor};
pub use settings::{ResizeBounds, Settings, SettingsError};
