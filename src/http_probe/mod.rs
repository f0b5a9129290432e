pub mod outcome;
pub mod probe;

pub mod prelude {
    pub use super::outcome::ProbeOutcome;
    pub use super::probe::run_probe;
}

use std::fmt::Write;
use std::io;

/// Renders an error and its full source chain as one log-friendly line.
pub(crate) fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

/// True if any error in the source chain is an I/O error of kind
/// `ConnectionRefused`, i.e. nothing is listening on the target port.
pub(crate) fn is_refused(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        current = e.source();
    }
    false
}
