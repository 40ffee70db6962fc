use std::io::Error;
use std::mem;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

static SIGNAL_RECIEVED: AtomicBool = AtomicBool::new(false);

/// Cooperative cancellation flag checked by line sources and the viewer loop.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
    watch_os: bool,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also trips on SIGINT or SIGTERM delivered to the process.
    pub fn from_os_signals() -> Result<Self, Error> {
        Self::setup_sighandler(libc::SIGINT)?;
        Self::setup_sighandler(libc::SIGTERM)?;
        Ok(StopSignal { flag: Arc::new(AtomicBool::new(false)),
                        watch_os: true })
    }

    fn setup_sighandler(signum: libc::c_int) -> Result<(), Error> {
        let mut sigaction_stop: libc::sigaction = unsafe { mem::zeroed() };
        sigaction_stop.sa_sigaction = stop_handler as extern "C" fn(libc::c_int) as libc::sighandler_t;
        let res = unsafe { libc::sigaction(signum, &sigaction_stop, ptr::null_mut()) };
        if res != 0 {
            return Err(Error::last_os_error());
        }
        Ok(())
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst) || (self.watch_os && SIGNAL_RECIEVED.load(Ordering::SeqCst))
    }
}

extern "C" fn stop_handler(_: libc::c_int) {
    SIGNAL_RECIEVED.store(true, Ordering::SeqCst);
}
