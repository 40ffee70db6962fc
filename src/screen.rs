use crate::core::TermInfo;
use crate::rhombus::Rhombus;
use std::io::{stdout, Error, Stdout, Write};

/// Output surface for rendered diamonds.
pub struct Screen<W: Write> {
    out: W,
    clear: String,
}

impl Screen<Stdout> {
    pub fn stdout() -> Self {
        let terminfo = TermInfo::from_env();
        Screen::with_clear(stdout(), terminfo.clear_command())
    }
}

impl<W: Write> Screen<W> {
    pub fn with_clear(out: W, clear: String) -> Self {
        Screen { out, clear }
    }

    pub fn clear(&mut self) -> Result<(), Error> {
        self.out.write_fmt(format_args!("{}", self.clear))?;
        self.out.flush()
    }

    /// Writes the diamond followed by a blank separator line.
    pub fn render(&mut self, rhombus: &Rhombus<'_>) -> Result<(), Error> {
        self.out.write_fmt(format_args!("{}\n", rhombus))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
