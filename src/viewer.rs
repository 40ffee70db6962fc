use crate::core::Matrix;
use crate::decoder::{DecodeStats, FrameDecoder};
use crate::error::Result;
use crate::rhombus::Rhombus;
use crate::screen::Screen;
use crate::signal::StopSignal;
use crate::source::LineSource;
use std::io::Write;

pub const MATRICES_PER_CYCLE: usize = 2;

/// Read-render loop: decode a pair of matrices, clear, draw both.
pub struct Viewer<S: LineSource, W: Write> {
    source: S,
    decoder: FrameDecoder,
    screen: Screen<W>,
    stop: StopSignal,
}

impl<S: LineSource, W: Write> Viewer<S, W> {
    pub fn new(source: S, decoder: FrameDecoder, screen: Screen<W>, stop: StopSignal) -> Self {
        Viewer { source,
                 decoder,
                 screen,
                 stop }
    }

    /// One full cycle. `Ok(false)` when the stream ended or a stop was
    /// requested before both matrices arrived; nothing is drawn then.
    pub fn run_cycle(&mut self) -> Result<bool> {
        let mut batch: Vec<Matrix> = Vec::with_capacity(MATRICES_PER_CYCLE);
        for _ in 0..MATRICES_PER_CYCLE {
            match self.decoder.read_matrix(&mut self.source, &self.stop)? {
                Some(m) => batch.push(m),
                None => return Ok(false),
            }
        }
        self.screen.clear()?;
        for m in &batch {
            let rhombus = Rhombus::new(m)?;
            self.screen.render(&rhombus)?;
        }
        Ok(true)
    }

    /// Cycles until stopped or the source runs dry; returns completed cycles.
    pub fn run(&mut self) -> Result<u64> {
        let mut cycles = 0u64;
        while !self.stop.is_stopped() {
            if !self.run_cycle()? {
                break;
            }
            cycles += 1;
            tracing::info!(cycle = cycles, "rendered");
        }
        let stats = self.decoder.stats();
        tracing::info!(cycles,
                       rows_accepted = stats.rows_accepted,
                       rejected_arity = stats.rejected_arity,
                       rejected_parse = stats.rejected_parse,
                       surplus_discarded = stats.surplus_discarded,
                       "viewer stopped");
        Ok(cycles)
    }

    pub fn stats(&self) -> DecodeStats {
        self.decoder.stats()
    }

    pub fn into_screen(self) -> Screen<W> {
        self.screen
    }
}
