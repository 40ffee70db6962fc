mod matrix;
mod terminfo;
mod termios;
mod tty;

pub use crate::core::matrix::*;
pub use crate::core::terminfo::*;
pub use crate::core::termios::*;
pub use crate::core::tty::*;
