use std::fs::{File, OpenOptions};
use std::io::{Error, Read};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

/// Character device the matrices arrive on.
#[derive(Debug)]
pub struct Tty {
    path: PathBuf,
    file: File,
}

impl Tty {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new().read(true)
                                     .write(true)
                                     .custom_flags(libc::O_NOCTTY)
                                     .open(path)?;
        Ok(Tty { path: path.to_path_buf(),
                 file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for Tty {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        self.file.read(buf)
    }
}

impl AsRawFd for Tty {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}
