//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the workspace binaries.
//!
//! * Console output goes to **stderr**, keeping stdout free for command output.
//! * Optional rolling log files with non-blocking writes (plain or JSON).
//! * The programmatic level and directives are defaults; `RUST_LOG` still wins when no
//!   explicit directives are set.
//!
//! ## Example
//!
//! ```rust
//! # use articula_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("articula")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use sealed::Sealed;
use std::fs;
use std::io::IsTerminal;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
    directory: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::WARN,
            directives: None,
            directory: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

/// Builder state: no name given yet.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state: named, ready to `init()`.
#[derive(Debug)]
pub struct Named(String);
/// Builder state: console output only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Builder state: a log directory was configured.
#[derive(Debug)]
pub struct WithFiles;

mod sealed {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFiles {}

/// Configures and installs the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`]; file-only knobs appear after
/// [`LoggerBuilder::directory`].
#[derive(Debug)]
#[must_use = "The builder does nothing until `init()` is called."]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    files: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the logger; also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), files: PhantomData }
    }
}

impl<N: Sealed, F: Sealed> LoggerBuilder<N, F> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Extra `EnvFilter` directives such as `articula_consult=debug`.
    ///
    /// Setting directives disables the `RUST_LOG` lookup. Invalid directives make
    /// [`LoggerBuilder::init`] fail.
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes rolling log files into `path`, created on init if missing.
    pub fn directory(self, path: impl Into<PathBuf>) -> LoggerBuilder<N, WithFiles> {
        let mut settings = self.settings;
        settings.directory = Some(path.into());
        LoggerBuilder { settings, name: self.name, files: PhantomData }
    }
}

impl<N: Sealed> LoggerBuilder<N, WithFiles> {
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Formats file output as JSON lines.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file writer's
    /// [`WorkerGuard`], and dropping it flushes pending lines.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`, bad
    ///   directives, or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name), .. } = self;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers = Vec::new();

        if settings.console {
            let ansi = std::io::stderr().is_terminal();
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(ansi).boxed());
        }

        let guard = match &settings.directory {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create log directory {}", dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if settings.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled; enable the console or set a directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, files = guard.is_some(), "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`].
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, files: PhantomData }
    }

    /// Parses a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for anything else.
    pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Unknown log level '{level}': {e}").into(),
            context: None,
        })
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid directives '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn builder_defaults() {
        let builder = Logger::builder().name("test-app");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::WARN);
        assert!(builder.settings.directory.is_none());
        assert!(builder.settings.directives.is_none());
    }

    #[test]
    #[serial]
    fn builder_collects_file_settings() {
        let builder = Logger::builder()
            .name("test-app")
            .directives("articula_consult=debug")
            .directory("/tmp/articula-logs")
            .max_files(3)
            .json(true)
            .level(LevelFilter::INFO);

        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.max_files, 3);
        assert!(builder.settings.json);
        assert_eq!(builder.settings.directives.as_deref(), Some("articula_consult=debug"));
        assert_eq!(
            builder.settings.directory.as_deref(),
            Some(std::path::Path::new("/tmp/articula-logs"))
        );
    }

    #[test]
    #[serial]
    fn invalid_settings_are_rejected_before_install() {
        let empty_name = Logger::builder().name("  ").init();
        assert!(matches!(empty_name, Err(LoggerError::InvalidConfiguration { .. })));

        let no_output = Logger::builder().name("quiet").console(false).init();
        assert!(matches!(no_output, Err(LoggerError::InvalidConfiguration { .. })));

        let bad_directives = Logger::builder().name("x").directives("articula=notalevel").init();
        assert!(matches!(bad_directives, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn parses_level_names() {
        assert_eq!(Logger::parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(Logger::parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert!(Logger::parse_level("loud").is_err());
    }

    #[test]
    #[serial]
    fn file_logging_setup() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let log_dir = tmp.path().join("logs");

        let logger = Logger::builder()
            .name("test-app")
            .console(false)
            .level(LevelFilter::INFO)
            .directory(&log_dir)
            .init()?;

        tracing::info!("hello world");
        std::thread::sleep(Duration::from_millis(20));
        drop(logger);

        let has_log = fs::read_dir(&log_dir)?
            .flatten()
            .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
        assert!(has_log, "at least one log file should be created");
        Ok(())
    }
}
