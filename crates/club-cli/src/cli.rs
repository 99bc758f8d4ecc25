//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Weekly club analytics
#[derive(Parser, Debug)]
#[command(name = "club-analytics", version, about)]
pub struct Cli {
    /// Log at debug level regardless of APP_ENV
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute weekly deltas and badges for a guild
    Compute {
        /// Guild id
        #[arg(short, long, env = "CLUB_GUILD_ID")]
        guild: String,

        /// Any date (YYYY-MM-DD) or RFC 3339 instant inside the target week
        #[arg(short, long)]
        week: Option<String>,

        /// Print results without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Show stored deltas for a week (latest stored week by default)
    Show {
        #[arg(short, long, env = "CLUB_GUILD_ID")]
        guild: String,

        #[arg(short, long)]
        week: Option<String>,
    },

    /// List weeks with stored deltas, newest first
    Weeks {
        #[arg(short, long, env = "CLUB_GUILD_ID")]
        guild: String,
    },

    /// Print badge metadata
    Badges {
        /// Single badge id; unknown ids print the fallback entry
        #[arg(long)]
        id: Option<String>,
    },

    /// Apply database migrations
    Migrate {
        /// Migrations directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
