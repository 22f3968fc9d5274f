use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use common_services::api::album::interfaces::AlbumScope;
use common_services::api::search::interfaces::MediaTypeFilter;
use std::path::PathBuf;

/// Browse an Immich server from the terminal.
#[derive(Debug, Parser)]
#[command(name = "immich", version, about)]
pub struct Cli {
    /// Path to the YAML settings file
    #[arg(short, long, value_name = "FILE", default_value = "config/settings.yaml")]
    pub config: PathBuf,

    /// Server root, overrides `server.base_url`
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// API key, overrides `server.api_key`
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List albums grouped by year
    Albums {
        #[arg(long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,
    },
    /// List the assets of an album
    Assets {
        album_id: String,
        /// Oldest first instead of newest first
        #[arg(long)]
        ascending: bool,
        /// Print a flat list instead of grouping by day
        #[arg(long)]
        flat: bool,
    },
    /// Search assets, smart search when TEXT is given
    Search(SearchArgs),
    /// Show the account the API key belongs to
    Me,
    /// Show server disk usage
    Storage,
    /// Show one asset with its EXIF data
    Asset { id: String },
    /// Mark an asset as favourite
    Favorite {
        id: String,
        /// Remove the favourite mark instead
        #[arg(long)]
        off: bool,
    },
    /// Print the media URL of an asset
    Url {
        id: String,
        #[arg(long)]
        thumbnail: bool,
        #[arg(long)]
        video: bool,
    },
    /// Log in with email and password and mint a new API key
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, clap::Args)]
pub struct SearchArgs {
    pub text: Option<String>,
    #[arg(long = "type", value_enum, default_value_t = MediaArg::All)]
    pub media_type: MediaArg,
    #[arg(long)]
    pub favorite: bool,
    #[arg(long)]
    pub not_in_album: bool,
    #[arg(long)]
    pub archived: bool,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub taken_after: Option<NaiveDate>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub taken_before: Option<NaiveDate>,
    /// Only assets uploaded after this day, oldest first
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub imported_after: Option<NaiveDate>,
    /// How many pages to walk
    #[arg(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    All,
    Owned,
    Shared,
}

impl From<ScopeArg> for AlbumScope {
    fn from(value: ScopeArg) -> Self {
        match value {
            ScopeArg::All => Self::All,
            ScopeArg::Owned => Self::Owned,
            ScopeArg::Shared => Self::Shared,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaArg {
    All,
    Image,
    Video,
}

impl From<MediaArg> for MediaTypeFilter {
    fn from(value: MediaArg) -> Self {
        match value {
            MediaArg::All => Self::All,
            MediaArg::Image => Self::Image,
            MediaArg::Video => Self::Video,
        }
    }
}
