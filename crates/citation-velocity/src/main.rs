//! Citation Velocity Digest - Entry Point
//!
//! Runs one fetch → rank → report pass and exits.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use citation_velocity::config::{Config, RankingConfig, ReportFormat, SortOrder, defaults};
use citation_velocity::{SemanticScholarClient, pipeline};

#[derive(Parser, Debug)]
#[command(name = "citation-velocity")]
#[command(about = "Rank recent Semantic Scholar papers by citation velocity")]
#[command(version)]
struct Cli {
    /// Search keyword
    #[arg(long, env = "KEYWORDS")]
    keyword: Option<String>,

    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Youngest eligible paper, in months (inclusive, must be positive)
    #[arg(long, default_value_t = defaults::MIN_MONTHS, env = "MIN_MONTHS")]
    min_months: f64,

    /// Oldest eligible paper, in months (inclusive)
    #[arg(long, default_value_t = defaults::MAX_MONTHS, env = "MAX_MONTHS")]
    max_months: f64,

    /// Minimum total citations
    #[arg(long, default_value_t = defaults::MIN_CITATIONS, env = "MIN_CITATIONS")]
    min_citations: i32,

    /// Number of papers in the report
    #[arg(long, default_value_t = defaults::TOP_N)]
    top: usize,

    /// Order in which the API returns candidates
    #[arg(long, value_enum, default_value_t = SortOrder::Relevance, env = "SORT")]
    sort: SortOrder,

    /// Report file
    #[arg(long, short, default_value = defaults::OUTPUT_PATH)]
    output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
    format: ReportFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            sort: self.sort,
            ranking: RankingConfig {
                min_months: self.min_months,
                max_months: self.max_months,
                min_citations: self.min_citations,
                top_n: self.top,
            },
            output_path: self.output,
            format: self.format,
            ..Config::from_inputs(self.keyword, self.api_key)
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = cli.into_config();
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        keyword = %config.keyword,
        min_months = config.ranking.min_months,
        max_months = config.ranking.max_months,
        min_citations = config.ranking.min_citations,
        "Starting citation velocity digest"
    );

    let client = SemanticScholarClient::new(&config)?;
    let now = chrono::Local::now().naive_local();
    let digest = pipeline::run(&client, &config, now).await?;

    if digest.fetch_failed {
        tracing::warn!("Search failed; wrote the fallback report");
    }

    Ok(())
}
