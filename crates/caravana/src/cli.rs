use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::AppOptions;
use crate::config::Config;
use crate::deck::SLIDE_COUNT;

#[derive(Parser)]
#[command(name = "caravana")]
#[command(author, version, about)]
#[command(long_about = "A full-screen scrollytelling presentation of the Caravana musicians.\n\n\
    Scroll, swipe or use the arrow keys to travel through the slides.\n\n\
    Examples:\n  \
    caravana                     Launch fullscreen\n  \
    caravana --windowed          Launch in a window\n  \
    caravana --slide 9           Open on the gallery\n  \
    caravana slides              List the slides and their timings")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long)]
    pub slide: Option<usize>,

    /// Start with auto-advance paused
    #[arg(long)]
    pub paused: bool,

    /// Start with sound on
    #[arg(long)]
    pub unmuted: bool,

    /// Directory holding the `assets/` media tree
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the slides with their timing
    Slides,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.assets, defaults.start_muted)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Launch settings: flags win over the config file.
    pub fn app_options(&self, config: &Config) -> anyhow::Result<AppOptions> {
        let start_slide = match self.slide {
            Some(n) if n == 0 || n > SLIDE_COUNT => {
                anyhow::bail!("Slide {n} out of range. Must be between 1 and {SLIDE_COUNT}.")
            }
            Some(n) => n - 1,
            None => 0,
        };
        let defaults = AppOptions::default();
        Ok(AppOptions {
            windowed: self.windowed || config.windowed(),
            start_slide,
            start_paused: self.paused,
            start_muted: !self.unmuted && config.start_muted(),
            auto_advance: config.auto_advance(),
            assets: self
                .assets
                .clone()
                .or_else(|| config.assets())
                .unwrap_or(defaults.assets),
        })
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Slides) => {
                crate::commands::slides::run();
                Ok(())
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => {
                let options = self.app_options(&Config::load_or_default())?;
                crate::app::run(options)
            }
        }
    }
}
