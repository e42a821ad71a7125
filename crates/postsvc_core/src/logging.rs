//! File logging for embedding callers.
//!
//! Only setup code logs; post lookups never do. A process gets at most one
//! logger, and asking for a different one afterwards is an error.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle,
    Naming, WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "postsvc";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;

static LOGGER: OnceCell<Installed> = OnceCell::new();

struct Installed {
    level: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

pub type LoggingResult<T> = Result<T, LoggingError>;

#[derive(Debug)]
pub enum LoggingError {
    RelativeDir(PathBuf),
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    Backend(FlexiLoggerError),
    /// A logger with another level or directory is already running.
    Conflict {
        active_level: LevelFilter,
        active_dir: PathBuf,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeDir(dir) => {
                write!(f, "log directory must be absolute: `{}`", dir.display())
            }
            Self::CreateDir { dir, source } => {
                write!(f, "cannot create log directory `{}`: {source}", dir.display())
            }
            Self::Backend(err) => write!(f, "logger backend failed: {err}"),
            Self::Conflict {
                active_level,
                active_dir,
            } => write!(
                f,
                "postsvc logging already runs at `{active_level}` in `{}`",
                active_dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            Self::RelativeDir(_) | Self::Conflict { .. } => None,
        }
    }
}

impl From<FlexiLoggerError> for LoggingError {
    fn from(value: FlexiLoggerError) -> Self {
        Self::Backend(value)
    }
}

/// Level used when the caller has no preference: `debug` in debug builds,
/// `info` otherwise.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Writes rolling `postsvc*.log` files under `dir` at `level`.
///
/// Calling again with the same level and directory is a no-op.
///
/// # Errors
/// - `RelativeDir` when `dir` is not absolute.
/// - `CreateDir` / `Backend` when the directory or logger cannot be set up.
/// - `Conflict` when another level or directory is already active.
pub fn init_logging(level: LevelFilter, dir: &Path) -> LoggingResult<()> {
    if !dir.is_absolute() {
        return Err(LoggingError::RelativeDir(dir.to_path_buf()));
    }

    let installed = LOGGER.get_or_try_init(|| install(level, dir))?;
    if installed.level != level || installed.dir != dir {
        return Err(LoggingError::Conflict {
            active_level: installed.level,
            active_dir: installed.dir.clone(),
        });
    }
    Ok(())
}

fn install(level: LevelFilter, dir: &Path) -> LoggingResult<Installed> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let handle = Logger::with(LogSpecification::builder().default(level).build())
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=logging_ready module=postsvc level={level} dir={} version={}",
        dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(Installed {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}
