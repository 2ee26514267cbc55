//! Logger initialization built on flexi_logger
//!
//! The registry itself never logs its errors (callers decide recovery); it
//! emits debug/trace records on discovery, build, and cache transitions.
//! This module wires those records to an output. Format and file target
//! are fixed at initialization; only the level can change afterwards.

// Global static logger handle for flexi_logger
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<flexi_logger::LoggerHandle>> =
    std::sync::OnceLock::new();

pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::{FileSpec, Logger};

    let level_str = log_level.unwrap_or("info");
    let format_type = log_format.unwrap_or("text");

    let mut logger = Logger::try_with_str(level_str)?;

    logger = match format_type {
        "json" => logger.format(json_format),
        _ => logger.format(text_format),
    };

    // Configure file output if requested
    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    // Start the logger and store the handle
    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

/// Change the log level at runtime
///
/// # Limitations
/// Format and file target cannot be changed once the logger has started;
/// flexi_logger fixes those at initialization. Only the level specification
/// is adjustable here.
pub fn reconfigure_log_level(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(handle_mutex) = LOGGER_HANDLE.get() {
        if let Ok(mut handle) = handle_mutex.lock() {
            let _ = handle.parse_and_push_temp_spec(log_level);
            Ok(())
        } else {
            Err("Could not acquire logger handle lock".into())
        }
    } else {
        Err("Logger handle not initialised. Call init_logging first.".into())
    }
}

// Plain text format: "YYYY-MM-DD HH:mm:ss.fff INF message (encoding/registry.rs:42)"
fn text_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level_abbr = level_abbreviation(record.level());
    let target_formatted = format_target_as_path(record.target(), record.line());

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr,
        record.args(),
        target_formatted
    )
}

// Compact single-line JSON records
fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let level_abbr = level_abbreviation(record.level());
    let target_formatted = format_target_as_path(record.target(), record.line());

    // Ordered: timestamp, level, message, metadata
    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr,
        "message": record.args().to_string(),
        "target": target_formatted
    });

    match to_string(&json_obj) {
        Ok(json_string) => {
            w.write_all(json_string.as_bytes())?;
            Ok(())
        }
        Err(_) => {
            w.write_all(b"{\"error\":\"Failed to serialize log message\"}")?;
            Ok(())
        }
    }
}

fn level_abbreviation(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// Helper function to format target as file path with line number
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    // Convert tokreg::encoding::registry -> encoding/registry.rs
    let path_like = if let Some(without_prefix) = target.strip_prefix("tokreg::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}
