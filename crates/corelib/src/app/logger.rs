use fern::colors::{Color, ColoredLevelConfig};
use std::sync::Once;
use time::OffsetDateTime;
use time::format_description::{self, BorrowedFormatItem};

static INSTALL: Once = Once::new();

const STAMP_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

// image encoding logs per chunk at debug level
const QUIET_TARGETS: [&str; 2] = ["png", "image"];

/// Stdout logger settings
///
/// Each line reads `<local time> [<target>] <LEVEL>: <message>` with a colored level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    level: log::LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(log::LevelFilter::Info)
    }
}

impl LogConfig {
    pub const fn new(level: log::LevelFilter) -> Self {
        Self { level }
    }

    /// Everything, per frame traces included
    pub const fn trace() -> Self {
        Self::new(log::LevelFilter::Trace)
    }

    pub const fn debug() -> Self {
        Self::new(log::LevelFilter::Debug)
    }

    #[inline]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
    }
}

fn quiet_level(level: log::LevelFilter) -> log::LevelFilter {
    level.min(log::LevelFilter::Warn)
}

fn timestamp(format: &[BorrowedFormatItem<'_>]) -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(format)
        .unwrap_or_default()
}

fn dispatch(config: LogConfig) -> Result<fern::Dispatch, String> {
    let stamp = format_description::parse(STAMP_FORMAT).map_err(|e| e.to_string())?;
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack);

    let dispatch = QUIET_TARGETS.iter().fold(
        fern::Dispatch::new().level(config.level),
        |dispatch, target| dispatch.level_for(*target, quiet_level(config.level)),
    );

    Ok(dispatch
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                timestamp(&stamp),
                record.target(),
                colors.color(record.level()),
                message
            ))
        })
        .chain(std::io::stdout()))
}

/// Installs the global logger, only the first call takes effect
pub(crate) fn init_logs(config: LogConfig) {
    INSTALL.call_once(|| {
        let res = dispatch(config).and_then(|d| d.apply().map_err(|e| e.to_string()));
        if let Err(e) = res {
            eprintln!("Error initializing logs: {e}");
        }
    });
}
