use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::LevelFilter;
use log::Level;
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use once_cell::sync::OnceCell;
use thiserror::Error;

/// Environment variable overriding log filters (`env_logger` syntax).
pub const LOG_ENV_VAR: &str = "HEREDITY_LOG";

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

static INSTANCE: OnceCell<Logger> = OnceCell::new();

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Logger was already initialized")]
    AlreadyInitialized,

    #[error("Failed to wrap logger with multiprogress")]
    SetLogger(#[source] log::SetLoggerError),
}

#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {
    /// Install the process-wide logger.
    /// # Errors
    /// - if a logger was already installed.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        if INSTANCE.get().is_some() {
            return Err(LoggerError::AlreadyInitialized)
        }

        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default()
            .filter(LOG_ENV_VAR);

        let logger = Builder::new().filter_level(log_level)
            .format(|buf, record| {
                let (traceback, set_intensity) = match record.level() {
                    Level::Error => (format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)), true),
                    _            => (String::new(), false),
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(set_intensity);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .build();

        // Progress bar support.
        let multi_pg = MultiProgress::new();
        LogWrapper::new(multi_pg.clone(), logger)
            .try_init()
            .map_err(LoggerError::SetLogger)?;
        log::set_max_level(log_level);
        INSTANCE.set(Self{multi_pg}).map_err(|_| LoggerError::AlreadyInitialized)
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }

    /// Shared multi-progress handle. `None` until `Logger::init()` is called.
    pub fn multi() -> Option<&'static MultiProgress> {
        INSTANCE.get().map(|logger| &logger.multi_pg)
    }

    /// Progress bar of `len` steps, drawn alongside log lines.
    /// Hidden when the logger is uninitialized, or when only errors are displayed.
    #[must_use]
    pub fn progress_bar(len: u64, message: &str) -> ProgressBar {
        let progress = match Self::multi() {
            Some(multi) if log::max_level() > LevelFilter::Error => {
                let style = ProgressStyle::default_bar()
                    .template(PROGRESS_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-");
                multi.add(ProgressBar::new(len).with_style(style))
            },
            _ => ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden()),
        };
        progress.set_message(message.to_string());
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level(){
        Logger::init(0).expect("Failed to initialize logger");
        assert!(Logger::multi().is_some());
        assert!(matches!(Logger::init(0), Err(LoggerError::AlreadyInitialized)));

        for level in 0..u8::MAX {
            Logger::set_level(level);

            let expected_level = match level {
                0           => LevelFilter::Error,
                1           => LevelFilter::Warn,
                2           => LevelFilter::Info,
                3           => LevelFilter::Debug,
                4..=u8::MAX => LevelFilter::Trace
            };

            assert_eq!(log::max_level(), expected_level);
        }
    }

    #[test]
    fn progress_bar_length() {
        let progress = Logger::progress_bar(16, "enumerating");
        assert_eq!(progress.length(), Some(16));
        progress.inc(4);
        assert_eq!(progress.position(), 4);
    }
}
