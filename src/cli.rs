use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use neo_watch::application::dto::OutputFormat;
use neo_watch::neo_tracking::domain::{FilterUpdate, SortKey, SortOrder};
use std::path::PathBuf;

/// Browse NASA's Near-Earth Object close-approach feed
#[derive(Parser, Debug)]
#[command(name = "neo-watch")]
#[command(version)]
#[command(about = "Browse NASA's Near-Earth Object close-approach feed", long_about = None)]
pub struct Args {
    /// Output format: markdown or json [default: markdown]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./neo-watch.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// NeoWs API key (overrides NASA_API_KEY and the config file)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List close approaches grouped by date
    Feed(FeedArgs),
    /// Show one object with its orbital data when available
    Show(ShowArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct FeedArgs {
    /// First day to fetch (YYYY-MM-DD) [default: today]
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// Last day to fetch, at most 7 days after --start [default: start + 6 days]
    #[arg(long, value_name = "DATE")]
    pub end: Option<NaiveDate>,

    /// Additional pages to load after the first window
    #[arg(long, default_value_t = 0)]
    pub pages: u32,

    /// Only show potentially hazardous objects
    #[arg(long)]
    pub hazardous: bool,

    /// Order within each day: date, size or distance
    #[arg(long, value_name = "KEY")]
    pub sort_by: Option<SortKey>,

    /// Sort direction: asc or desc
    #[arg(long, value_name = "ORDER")]
    pub order: Option<SortOrder>,

    /// Only show approaches on this day, or from this day when --to is given
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Only show approaches up to this day
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,
}

impl FeedArgs {
    /// View filters set on the command line; unset flags keep configured values
    pub fn filter_update(&self) -> FilterUpdate {
        FilterUpdate {
            hazardous_only: self.hazardous.then_some(true),
            sort_by: self.sort_by,
            sort_order: self.order,
            start_date: self.from.map(Some),
            end_date: self.to.map(Some),
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct ShowArgs {
    /// NeoWs object id, as shown in the feed
    pub id: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
