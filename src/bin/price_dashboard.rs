use anyhow::{Context, Result};
use clap::Parser;
use price_history_sdk::{
    constants::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH},
    BoardPresenter, Dashboard, DashboardConfig, FileSnapshotSource, HttpSnapshotSource,
    PngChartRenderer, SnapshotSource,
};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Fetch an asset's price history and show its summary and chart")]
struct Args {
    /// History endpoint URL (overrides PRICE_DASHBOARD_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Read the history from a JSON dump instead of the endpoint
    #[arg(long, conflicts_with = "endpoint")]
    input: Option<PathBuf>,

    /// Write the price chart to this PNG file
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    height: u32,

    /// Asset key under each snapshot's `data`
    #[arg(long)]
    asset_id: Option<String>,

    /// Ticker shown in the headline
    #[arg(long)]
    symbol: Option<String>,

    /// Quote currency key
    #[arg(long)]
    currency: Option<String>,

    /// Refresh every N seconds instead of running once
    #[arg(long, value_name = "SECS")]
    watch: Option<u64>,
}

fn print_board(presenter: &BoardPresenter) {
    for line in presenter.board().to_lines() {
        println!("{}", line);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                "price_history_sdk=info"
                    .parse()
                    .context("Invalid log directive")?,
            ),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = DashboardConfig::from_env();
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(asset_id) = args.asset_id {
        config.asset_id = asset_id;
    }
    if let Some(symbol) = args.symbol {
        config.symbol = symbol;
    }
    if let Some(currency) = args.currency {
        config.currency = currency;
    }

    let source: Arc<dyn SnapshotSource> = match &args.input {
        Some(path) => Arc::new(FileSnapshotSource::new(path)),
        None => Arc::new(
            HttpSnapshotSource::new(&config.endpoint).context("Failed to build HTTP client")?,
        ),
    };

    let mut presenter = BoardPresenter::new(&config.symbol, config.board());
    if let Some(path) = &args.chart {
        presenter = presenter.with_chart(Box::new(PngChartRenderer::new(
            path,
            args.width,
            args.height,
        )));
    }

    let mut dashboard = Dashboard::new(source, config.transformer(), presenter);

    match args.watch {
        Some(secs) => {
            dashboard
                .run_periodic(Duration::from_secs(secs.max(1)), |presenter, outcome| {
                    if outcome.is_ok() {
                        print_board(presenter);
                        println!();
                    }
                    ControlFlow::Continue(())
                })
                .await;
        }
        None => {
            let outcome = dashboard.run_once().await;
            print_board(dashboard.presenter());
            outcome.context("Failed to render price history")?;
        }
    }

    Ok(())
}
