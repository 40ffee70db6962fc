mod core;
pub mod decoder;
mod error;
pub mod rhombus;
mod screen;
mod signal;
pub mod source;
mod viewer;

pub use crate::core::Matrix;
pub use decoder::{DecodeStats, FrameDecoder, RowRejection};
pub use error::{Error, Result};
pub use rhombus::{Band, Rhombus};
pub use screen::Screen;
pub use signal::StopSignal;
pub use source::{LineSource, ReaderLines, SerialPort};
pub use viewer::{Viewer, MATRICES_PER_CYCLE};
