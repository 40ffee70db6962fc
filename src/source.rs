use crate::core::{TermiosCond, Tty};
use crate::error::Result;
use crate::signal::StopSignal;
use std::io::{BufRead, ErrorKind, Read};
use std::path::Path;

/// Device the sender is attached to.
pub const SERIAL_PORT: &str = "/dev/ttyUSB0";
pub const BAUD_RATE: libc::speed_t = libc::B9600;

const READ_CHUNK: usize = 256;

/// Blocking supplier of text lines.
///
/// `Ok(None)` means no further line will come, either because `stop`
/// fired or the underlying stream ended.
pub trait LineSource {
    fn next_line(&mut self, stop: &StopSignal) -> Result<Option<String>>;
}

/// Lines from any buffered reader: a replay file, stdin, or memory.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        ReaderLines { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self, stop: &StopSignal) -> Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            if stop.is_stopped() {
                return Ok(None);
            }
            let (done, used) = match self.reader.fill_buf() {
                // a stop signal lands here as EINTR; the loop head checks it
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
                Ok(available) if available.is_empty() => {
                    if buf.is_empty() {
                        return Ok(None);
                    }
                    break;
                },
                Ok(available) => match available.iter().position(|&b| b == b'\n') {
                    Some(end) => {
                        buf.extend_from_slice(&available[..=end]);
                        (true, end + 1)
                    },
                    None => {
                        buf.extend_from_slice(available);
                        (false, available.len())
                    },
                },
            };
            self.reader.consume(used);
            if done {
                break;
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Bytes received so far, cut into lines on `\n`.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
    }

    /// Oldest complete line including its `\n`; a trailing fragment stays.
    pub fn take_line(&mut self) -> Option<String> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.pending.drain(..=end).collect();
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Reads `reader` into `buffer` until a line is complete.
///
/// `Ok(0)` is a poll timeout on the serial line, not end of stream; only
/// `stop` ends the wait.
fn poll_line<R: Read>(reader: &mut R, buffer: &mut LineBuffer, stop: &StopSignal) -> Result<Option<String>> {
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        if let Some(line) = buffer.take_line() {
            return Ok(Some(line));
        }
        if stop.is_stopped() {
            return Ok(None);
        }
        match reader.read(&mut chunk) {
            Ok(0) => continue,
            Ok(n) => {
                tracing::trace!(bytes = n, "serial read");
                buffer.push(&chunk[..n]);
            },
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Serial device in raw mode; original line settings come back on drop.
pub struct SerialPort {
    // dropped before `tty` so the settings are restored on an open fd
    _termioscond: TermiosCond,
    tty: Tty,
    buffer: LineBuffer,
}

impl SerialPort {
    pub fn open(path: &Path, speed: libc::speed_t) -> Result<Self> {
        let tty = Tty::open(path)?;
        let termioscond = TermiosCond::from_tty(&tty, speed)?;
        tracing::info!(port = %tty.path().display(), "serial port opened");
        Ok(SerialPort { _termioscond: termioscond,
                        tty,
                        buffer: LineBuffer::new() })
    }

    pub fn open_default() -> Result<Self> {
        Self::open(Path::new(SERIAL_PORT), BAUD_RATE)
    }
}

impl LineSource for SerialPort {
    fn next_line(&mut self, stop: &StopSignal) -> Result<Option<String>> {
        poll_line(&mut self.tty, &mut self.buffer, stop)
    }
}
