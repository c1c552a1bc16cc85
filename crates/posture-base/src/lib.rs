pub mod logging;
pub mod rect;
pub mod tensor;
pub mod vec2;

pub use logging::{ConsoleLogger, FileLogger, default_level, init_console_logger, init_file_logger};
pub use rect::Rect;
pub use tensor::{Tensor, TensorError};
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use posture_base::log::*
pub use log;
