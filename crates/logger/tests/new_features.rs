//! Tests for verbose and file-logging features.

use logger::{enable_verbose, error, info, verbose, warn};

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    // verbose is off by default and must stay silent
    verbose!("must not appear");

    enable_verbose();
    verbose!("verbose output for path {}", "software-engineering");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_tagged_messages() {
    use logger::init_file_logging;
    use std::fs;

    let log_path = std::env::temp_dir().join("roadmap_tracker_logger_test.log");
    let _ = fs::remove_file(&log_path);

    assert!(init_file_logging(&log_path));

    info!("marked cs101 completed");
    warn!("unknown node in catalog");
    error!("backend unreachable");

    // verbose bypasses the file sink entirely
    #[cfg(feature = "verbose")]
    {
        enable_verbose();
        verbose!("console-only chatter");
    }

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[INFO] marked cs101 completed"));
    assert!(contents.contains("[WARN] unknown node in catalog"));
    assert!(contents.contains("[ERROR] backend unreachable"));
    assert!(!contents.contains("console-only chatter"));

    let _ = fs::remove_file(&log_path);
}
