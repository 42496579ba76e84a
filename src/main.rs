mod cli;
mod config;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use cli::{Args, Command, FeedArgs, ShowArgs};
use config::ConfigFile;
use neo_watch::adapters::outbound::console::StderrProgressReporter;
use neo_watch::adapters::outbound::network::{
    NasaNeoWsClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use neo_watch::application::dto::{DetailRequest, FeedRequest, OutputFormat};
use neo_watch::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use neo_watch::application::read_models::{FeedSnapshot, ReadModelBuilder};
use neo_watch::application::use_cases::{BrowseFeedUseCase, ShowNeoDetailsUseCase};
use neo_watch::neo_tracking::domain::{
    FeedLimits, FeedWindow, FilterOptions, NeoId, ReportMetadata, SortKey, SortOrder,
    DEFAULT_HORIZON_DAYS,
};
use neo_watch::neo_tracking::policies::PaginationPolicy;
use neo_watch::neo_tracking::services::ReportGenerator;
use neo_watch::ports::outbound::NeoFormatter;
use neo_watch::shared::error::ExitCode;
use neo_watch::shared::Result;
use std::path::Path;
use std::process;
use std::str::FromStr;
use std::time::Duration;

const API_KEY_ENV: &str = "NASA_API_KEY";
const DEMO_API_KEY: &str = "DEMO_KEY";

#[tokio::main]
async fn main() {
    install_panic_hook();

    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("\n❌ neo-watch hit an unexpected failure and stopped.");
        eprintln!("   {}", info);
        eprintln!("\n💡 Hint: Re-run the command; if it keeps failing, try a smaller date range.");
    }));
}

/// Effective settings after merging CLI flags, environment and config file
#[derive(Debug)]
struct Settings {
    api_key: String,
    base_url: String,
    timeout: Duration,
    format: OutputFormat,
    filters: FilterOptions,
    pagination: PaginationPolicy,
    past_limit_days: u32,
    future_limit_days: u32,
}

impl Settings {
    /// API key precedence: flag, then environment, then config, then the public demo key
    fn resolve(args: &Args, config: ConfigFile, env_api_key: Option<String>) -> Result<Self> {
        let api_key = args
            .api_key
            .clone()
            .or(env_api_key.filter(|key| !key.trim().is_empty()))
            .or(config.api_key)
            .unwrap_or_else(|| DEMO_API_KEY.to_string());

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let mut filters = FilterOptions {
            hazardous_only: config.hazardous_only.unwrap_or(false),
            ..FilterOptions::default()
        };
        if let Some(sort_by) = config.sort_by.as_deref() {
            filters.sort_by = SortKey::from_str(sort_by).map_err(anyhow::Error::msg)?;
        }
        if let Some(sort_order) = config.sort_order.as_deref() {
            filters.sort_order = SortOrder::from_str(sort_order).map_err(anyhow::Error::msg)?;
        }

        let pagination = match config.page_span_days {
            Some(span) => PaginationPolicy::new(span).context("Invalid config: page_span_days")?,
            None => PaginationPolicy::default(),
        };

        Ok(Self {
            api_key,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            format,
            filters,
            pagination,
            past_limit_days: config.past_limit_days.unwrap_or(DEFAULT_HORIZON_DAYS),
            future_limit_days: config.future_limit_days.unwrap_or(DEFAULT_HORIZON_DAYS),
        })
    }

    fn limits(&self, today: NaiveDate) -> Result<FeedLimits> {
        FeedLimits::new(today, self.past_limit_days, self.future_limit_days)
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// First window to load; a lone --start gets a full 7-day window
fn requested_window(feed: &FeedArgs, today: NaiveDate) -> Result<Option<FeedWindow>> {
    match (feed.start, feed.end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => FeedWindow::new(start, end).map(Some),
        (Some(start), None) => Ok(Some(FeedWindow::starting_at(start))),
        (None, Some(end)) => FeedWindow::new(today, end).map(Some),
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config, std::env::var(API_KEY_ENV).ok())?;
    let today = Utc::now().date_naive();

    let client = NasaNeoWsClient::new(settings.api_key.clone(), settings.timeout)?
        .with_base_url(settings.base_url.clone());
    let progress_reporter = StderrProgressReporter::new();
    let metadata = ReportGenerator::generate_default_metadata();
    let formatter = FormatterFactory::create(settings.format);

    let rendered = match &args.command {
        Command::Feed(feed) => {
            run_feed(
                feed,
                &settings,
                today,
                client,
                progress_reporter,
                &metadata,
                formatter.as_ref(),
            )
            .await?
        }
        Command::Show(show) => {
            run_show(show, client, progress_reporter, &metadata, formatter.as_ref()).await?
        }
    };

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&rendered)?;

    Ok(())
}

async fn run_feed(
    feed: &FeedArgs,
    settings: &Settings,
    today: NaiveDate,
    client: NasaNeoWsClient,
    progress_reporter: StderrProgressReporter,
    metadata: &ReportMetadata,
    formatter: &dyn NeoFormatter,
) -> Result<String> {
    // Rejected locally, before any request goes out
    let window = requested_window(feed, today)?;

    let mut filters = settings.filters.clone();
    filters.apply(feed.filter_update());

    let mut use_case = BrowseFeedUseCase::new(
        client,
        progress_reporter,
        settings.limits(today)?,
        settings.pagination,
    );
    let response = use_case
        .execute(FeedRequest::new(window, feed.pages))
        .await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let groups = use_case.grouped(&filters);
    let model = ReadModelBuilder::build_feed(
        FeedSnapshot {
            groups: &groups,
            filters: &filters,
            total_loaded: response.total_loaded,
            has_more: response.has_more,
            error: use_case.last_error(),
        },
        metadata,
    );
    formatter.format_feed(&model)
}

async fn run_show(
    show: &ShowArgs,
    client: NasaNeoWsClient,
    progress_reporter: StderrProgressReporter,
    metadata: &ReportMetadata,
    formatter: &dyn NeoFormatter,
) -> Result<String> {
    let id = NeoId::new(show.id.as_str())?;

    let use_case = ShowNeoDetailsUseCase::new(client, progress_reporter);
    let response = use_case.execute(DetailRequest::new(id)).await?;

    let model = ReadModelBuilder::build_detail(&response.neo, response.orbital_enriched, metadata);
    formatter.format_detail(&model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use neo_watch::neo_tracking::domain::MAX_HORIZON_DAYS;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["neo-watch"];
        argv.extend_from_slice(extra);
        argv.push("feed");
        Args::try_parse_from(argv).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_api_key_precedence() {
        let config = || ConfigFile {
            api_key: Some("from-config".to_string()),
            ..ConfigFile::default()
        };

        let flag = Settings::resolve(
            &args(&["--api-key", "from-flag"]),
            config(),
            Some("from-env".into()),
        )
        .unwrap();
        assert_eq!(flag.api_key, "from-flag");

        let env = Settings::resolve(&args(&[]), config(), Some("from-env".into())).unwrap();
        assert_eq!(env.api_key, "from-env");

        let blank_env = Settings::resolve(&args(&[]), config(), Some("  ".into())).unwrap();
        assert_eq!(blank_env.api_key, "from-config");

        let demo = Settings::resolve(&args(&[]), ConfigFile::default(), None).unwrap();
        assert_eq!(demo.api_key, DEMO_API_KEY);
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::resolve(&args(&[]), ConfigFile::default(), None).unwrap();

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.filters, FilterOptions::default());
        assert_eq!(settings.pagination.span_days(), 7);

        let limits = settings.limits(date("2024-01-10")).unwrap();
        assert_eq!(limits.earliest(), date("2024-01-03"));
        assert_eq!(limits.future_ceiling(), date("2024-01-17"));
    }

    #[test]
    fn test_flag_format_overrides_config() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            sort_by: Some("distance".to_string()),
            page_span_days: Some(3),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(&args(&["-f", "json"]), config, None).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.filters.sort_by, SortKey::Distance);
        assert_eq!(settings.pagination.span_days(), 3);
    }

    #[test]
    fn test_page_span_out_of_range_rejected() {
        let config = ConfigFile {
            page_span_days: Some(8),
            ..ConfigFile::default()
        };

        let err = format!("{:#}", Settings::resolve(&args(&[]), config, None).unwrap_err());
        assert!(err.contains("page_span_days"));
        assert!(err.contains("between 1 and 7"));
    }

    #[test]
    fn test_widest_horizon_resolves_without_panic() {
        let config = ConfigFile {
            past_limit_days: Some(MAX_HORIZON_DAYS),
            future_limit_days: Some(MAX_HORIZON_DAYS),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(&args(&[]), config, None).unwrap();

        let limits = settings.limits(date("2024-01-10")).unwrap();
        assert!(limits.earliest() < date("1925-01-01"));
    }

    #[test]
    fn test_requested_window() {
        let today = date("2024-01-10");
        let mut feed = FeedArgs::default();
        assert!(requested_window(&feed, today).unwrap().is_none());

        feed.start = Some(date("2024-01-12"));
        let window = requested_window(&feed, today).unwrap().unwrap();
        assert_eq!(window.end(), date("2024-01-18"));

        feed.end = Some(date("2024-01-25"));
        let error = requested_window(&feed, today).unwrap_err();
        assert!(error.to_string().contains("7-day ranges maximum"));

        feed.start = None;
        feed.end = Some(date("2024-01-11"));
        let window = requested_window(&feed, today).unwrap().unwrap();
        assert_eq!(window.start(), today);
    }
}
