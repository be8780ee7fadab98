use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Where log lines go
pub(crate) enum Sink {
    File(PathBuf),
    Stdout { colored: bool },
}

/// `[rfc3339 - LEVEL] message [file:line]`, the one line format for every sink
fn write_line(
    out: fern::FormatCallback<'_>,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

pub(crate) fn sink_dispatch(sink: &Sink) -> ServerErrorResult<Dispatch> {
    let dispatch = match sink {
        Sink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        Sink::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        // Plain output for non-TTY (systemd, docker logs)
        Sink::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Ok(dispatch)
}

/// Install the global logger.
///
/// `log_file` wins over stdout; colouring only applies to stdout.
pub fn initialize(
    log_level: kg_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter: LevelFilter = log_level.into();
    let sink = match log_file {
        Some(path) => Sink::File(path),
        None => Sink::Stdout { colored },
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(sink_dispatch(&sink)?)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match sink {
        Sink::File(path) => info!("Logging at {} to {}", level_filter, path.display()),
        Sink::Stdout { .. } => info!("Logging at {} to stdout", level_filter),
    }

    // Bridge tracing (tower-http, sqlx) to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
