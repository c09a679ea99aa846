//! Minimal leveled logger with compile-time feature gates.
//!
//! Feature map:
//! - `log-info`: unlocks `info!` (on by default).
//! - `log-debug`: unlocks `debug!` plus a runtime on/off switch.
//! - `verbose`: unlocks `verbose!`, an untagged printer for chatty output.
//! - `file-logging`: tagged messages can be redirected to a file.
//!
//! `warn!` and `error!` are always compiled in. Tagged output goes to stdout,
//! except warnings and errors which go to stderr. When a log file is active,
//! tagged messages are written there instead of the console; `verbose!`
//! always stays on the console.

use std::fmt::Arguments;
#[cfg(any(feature = "log-debug", feature = "verbose"))]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::LazyLock;

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Logging levels, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Always emitted, routed to stderr.
    Error = 1,
    /// Always emitted, routed to stderr.
    Warn = 2,
    /// Gated behind the `log-info` feature.
    Info = 3,
    /// Gated behind the `log-debug` feature and a runtime flag.
    Debug = 4,
}

/// Startup level derived from the enabled features: the most detailed level
/// that can actually emit.
const fn default_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

/// Current runtime level.
static LOG_LEVEL: LazyLock<AtomicU8> = LazyLock::new(|| AtomicU8::new(default_level()));
/// Runtime switch for `debug!` output.
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);
/// Runtime switch for `verbose!` output.
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
/// Open log file, if file logging has been initialized.
#[cfg(feature = "file-logging")]
static LOG_FILE: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the runtime log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse a level name (case-insensitive) and set it. Returns false for
/// unrecognized names, leaving the level unchanged.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "error" | "err" => Level::Error,
        "warn" | "warning" => Level::Warn,
        "info" => Level::Info,
        "debug" => Level::Debug,
        _ => return false,
    };
    set_level(parsed);
    true
}

/// Turn the `debug!` runtime switch on (no-op without `log-debug`).
#[cfg(feature = "log-debug")]
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}
/// Turn the `debug!` runtime switch on (no-op without `log-debug`).
#[cfg(not(feature = "log-debug"))]
pub fn enable_debug() {}

/// Turn the `debug!` runtime switch off (no-op without `log-debug`).
#[cfg(feature = "log-debug")]
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}
/// Turn the `debug!` runtime switch off (no-op without `log-debug`).
#[cfg(not(feature = "log-debug"))]
pub fn disable_debug() {}

/// Whether `debug!` output is currently enabled.
#[cfg(feature = "log-debug")]
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}
/// Whether `debug!` output is currently enabled.
#[cfg(not(feature = "log-debug"))]
pub fn is_debug_enabled() -> bool {
    false
}

/// Turn the `verbose!` runtime switch on (no-op without `verbose`).
#[cfg(feature = "verbose")]
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}
/// Turn the `verbose!` runtime switch on (no-op without `verbose`).
#[cfg(not(feature = "verbose"))]
pub fn enable_verbose() {}

/// Turn the `verbose!` runtime switch off (no-op without `verbose`).
#[cfg(feature = "verbose")]
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}
/// Turn the `verbose!` runtime switch off (no-op without `verbose`).
#[cfg(not(feature = "verbose"))]
pub fn disable_verbose() {}

/// Whether `verbose!` output is currently enabled.
#[cfg(feature = "verbose")]
pub fn is_verbose_enabled() -> bool {
    VERBOSE_ENABLED.load(Ordering::SeqCst)
}
/// Whether `verbose!` output is currently enabled.
#[cfg(not(feature = "verbose"))]
pub fn is_verbose_enabled() -> bool {
    false
}

/// Open `path` in append mode and route tagged messages to it from now on.
/// Returns true on success.
///
/// # Panics
///
/// Panics if the `LOG_FILE` mutex is poisoned.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok_and(|file| {
            let mut log_file = LOG_FILE.lock().unwrap();
            *log_file = Some(file);
            true
        })
}

/// Open `path` in append mode and route tagged messages to it from now on.
/// Always false when the `file-logging` feature is disabled.
#[cfg(not(feature = "file-logging"))]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

#[cfg(feature = "file-logging")]
fn append_to_file(message: &str) {
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = writeln!(file, "{message}");
            let _ = file.flush();
        }
    }
}

#[cfg(not(feature = "file-logging"))]
fn append_to_file(_message: &str) {}

#[cfg(feature = "file-logging")]
fn file_sink_active() -> bool {
    LOG_FILE.lock().map(|lf| lf.is_some()).unwrap_or(false)
}

#[cfg(not(feature = "file-logging"))]
fn file_sink_active() -> bool {
    false
}

/// Route a formatted message to its sink.
///
/// `tag` carries the level marker (e.g., `[WARN]`). Tagged messages prefer
/// the file sink when one is active; otherwise they go to stdout, or stderr
/// when `to_stderr` is set.
#[allow(dead_code)]
fn route(tag: &str, msg: &str, to_stderr: bool) {
    if file_sink_active() && !tag.is_empty() {
        append_to_file(&format!("{tag} {msg}"));
        return;
    }

    match (to_stderr, tag.is_empty()) {
        (true, true) => eprintln!("{msg}"),
        (true, false) => eprintln!("{tag} {msg}"),
        (false, true) => println!("{msg}"),
        (false, false) => println!("{tag} {msg}"),
    }
}

/// Whether a message at `level` passes both the feature gates and the
/// runtime level (plus the debug switch for `Level::Debug`).
#[allow(dead_code)]
fn level_enabled(level: Level) -> bool {
    match level {
        Level::Info if !cfg!(feature = "log-info") => return false,
        Level::Debug if !cfg!(feature = "log-debug") => return false,
        _ => {}
    }

    let current = LOG_LEVEL.load(Ordering::SeqCst);
    (level as u8) <= current && (level != Level::Debug || is_debug_enabled())
}

/// Dispatch used by the public macros; not meant to be called directly.
pub fn log_impl(level: Level, args: Arguments) {
    if !level_enabled(level) {
        return;
    }
    let msg = args.to_string();
    match level {
        Level::Error => route("[ERROR]", &msg, true),
        Level::Warn => route("[WARN]", &msg, true),
        Level::Info => route("[INFO]", &msg, false),
        Level::Debug => route("[DEBUG]", &msg, false),
    }
}

#[macro_export]
/// Logs an error-level message (always enabled). Emits to stderr.
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a warning-level message (always enabled). Emits to stderr.
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs an info-level message (requires the `log-info` feature).
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a debug-level message (requires the `log-debug` feature and the
/// runtime debug switch).
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
/// Prints an untagged verbose message (requires the `verbose` feature and
/// the runtime verbose switch). Never written to the log file.
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose")]
        {
            if $crate::is_verbose_enabled() {
                println!($($arg)*);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{set_level, set_level_from_str, Level};

    #[test]
    fn macros_do_not_panic() {
        set_level(Level::Debug);
        crate::error!("e {}", 1);
        crate::warn!("w {}", 2);
        crate::info!("i {}", 3);
    }

    #[test]
    fn unknown_level_name_is_rejected() {
        assert!(!set_level_from_str("loud"));
        assert!(set_level_from_str("warning"));
    }

    #[cfg(feature = "log-debug")]
    #[test]
    fn debug_switch_gates_output() {
        use super::{disable_debug, enable_debug, is_debug_enabled};
        set_level(Level::Debug);
        disable_debug();
        assert!(!is_debug_enabled());
        crate::debug!("silent");
        enable_debug();
        assert!(is_debug_enabled());
        crate::debug!("audible");
    }
}
