use serde::Deserialize;
use time::macros::format_description;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[derive(Debug, Deserialize)]
pub struct Config {
    dir: String,
    name: String,

    /// Maximum number of log files to keep; older files are deleted once the
    /// limit is exceeded. When unset no files are deleted.
    keep: Option<usize>,

    /// Minimum level logged to file and stdout. Defaults to DEBUG when
    /// unset.
    ///
    /// Converted to a [`tracing::Level`].
    level: Option<String>,

    /// Period after which a new .log file is started. Defaults to DAILY
    /// when unset.
    ///
    /// Converted to a [`rolling::Rotation`].
    rotation: Option<String>,
}

pub fn set_global_logging_config(c: &Config) {
    let mut file_appender = rolling::RollingFileAppender::builder()
        .filename_prefix(c.name.clone())
        .filename_suffix(".log");

    if let Some(rotation) = &c.rotation {
        file_appender = file_appender.rotation(parse_rotation(rotation.as_str()));
    } else {
        file_appender = file_appender.rotation(rolling::Rotation::DAILY);
    }

    if let Some(keep) = c.keep {
        file_appender = file_appender.max_log_files(keep);
    }

    let file_appender = file_appender.build(c.dir.clone()).unwrap();

    let (non_blocking, _) = tracing_appender::non_blocking(file_appender);
    let writer = std::io::stdout.and(non_blocking);

    let mut subscriber = tracing_subscriber::fmt()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"
        )))
        .with_writer(writer);

    if let Some(level) = &c.level {
        subscriber = subscriber.with_max_level(parse_level(level));
    } else {
        subscriber = subscriber.with_max_level(tracing::Level::DEBUG);
    }

    subscriber.init();
}

fn parse_rotation(s: &str) -> rolling::Rotation {
    match s {
        "DAILY" => rolling::Rotation::DAILY,
        "HOURLY" => rolling::Rotation::HOURLY,
        "MINUTELY" => rolling::Rotation::MINUTELY,
        "NEVER" => rolling::Rotation::NEVER,
        _ => panic!("log rotation must be one of \"{}\", \"{}\", \"{}\", \"{}\"", "DAILY", "HOURLY", "MINUTELY", "NEVER")
    }
}

fn parse_level(l: &str) -> tracing::Level {
    match l {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => panic!("log level must be one of \"{}\", \"{}\", \"{}\", \"{}\", \"{}\"", "TRACE", "DEBUG", "INFO", "WARN", "ERROR")
    }
}
