//! Progress output gated on the `-q` / `-v` flags.
//!
//! `Quiet` prints nothing but errors, `Normal` prints one line per written
//! file, `Verbose` adds resolved settings, row counts and stage timings.

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

/// Output level, ordered from least to most chatty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

impl Level {
    /// Level selected by the command-line flags; `quiet` wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Level::Quiet,
            (false, true) => Level::Verbose,
            (false, false) => Level::Normal,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Normal as u8);

/// Set the process-wide output level.
pub fn init(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Current output level.
pub fn level() -> Level {
    match LEVEL.load(Ordering::Relaxed) {
        0 => Level::Quiet,
        2 => Level::Verbose,
        _ => Level::Normal,
    }
}

/// Returns `true` if output at `wanted` should be printed.
pub fn enabled(wanted: Level) -> bool {
    level() >= wanted
}

/// `println!` at [`Level::Verbose`].
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::enabled($crate::verbose::Level::Verbose) {
            println!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// `println!` at [`Level::Normal`] and above.
macro_rules! dprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::enabled($crate::verbose::Level::Normal) {
            println!($($arg)*);
        }
    };
}

pub(crate) use dprintln;

/// Reports how long a stage took when dropped, in verbose mode only.
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    /// Start timing `label`.
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        vprintln!("  {}: {:.1?}", self.label, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(Level::from_flags(true, true), Level::Quiet);
        assert_eq!(Level::from_flags(false, true), Level::Verbose);
        assert_eq!(Level::from_flags(false, false), Level::Normal);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Verbose > Level::Normal);
        assert!(Level::Normal > Level::Quiet);
    }
}
