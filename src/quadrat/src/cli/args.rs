use clap::{ArgAction, Args};
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Shared verbosity settings for log output.
#[derive(Debug, Args)]
pub struct Verbosity {
    /// Raises the log level; may be repeated for more detail.
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Verbosity {
    /// Installs the error report handler and the global logger at the
    /// selected level.
    pub fn setup(&self) -> eyre::Result<()> {
        color_eyre::install()?;

        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };

        SimpleLogger::new().with_level(level).init()?;

        Ok(())
    }
}
