use crate::core::Tty;
use std::io::Error;
use std::os::unix::io::{AsRawFd, RawFd};
use termios::*;

/// Raw 8N1 line settings for the serial device, restored on drop.
pub struct TermiosCond {
    fd: RawFd,
    original_termios: Termios,
}

impl TermiosCond {
    pub fn from_tty(tty: &Tty, speed: libc::speed_t) -> Result<Self, Error> {
        let fd = tty.as_raw_fd();
        let mut termios = Termios::from_fd(fd)?;
        let termioscond = TermiosCond { fd,
                                        original_termios: termios };
        termios.c_cflag &= !(CSIZE | PARENB | CSTOPB);
        termios.c_cflag |= CS8 | CREAD | CLOCAL;
        termios.c_lflag &= !(ICANON | ECHO | ECHOE | ECHOK | ECHONL | ISIG | IEXTEN);
        termios.c_oflag &= !OPOST;
        termios.c_iflag &= !(IGNBRK | BRKINT | PARMRK | ISTRIP | INLCR | IGNCR | ICRNL | IXON);
        // read() returns after at most 100ms so the stop flag gets polled
        termios.c_cc[VMIN] = 0;
        termios.c_cc[VTIME] = 1;
        cfsetspeed(&mut termios, speed)?;
        tcsetattr(fd, TCSANOW, &termios)?;
        tcflush(fd, TCIFLUSH)?;
        Ok(termioscond)
    }
}

impl Drop for TermiosCond {
    fn drop(&mut self) {
        let _ = tcsetattr(self.fd, TCSANOW, &self.original_termios);
    }
}
