use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use irops_core::filter::FilterState;
use irops_core::site::QuerySite;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "irops")]
#[command(about = "IROPS Control Center - irregular operations dashboard and intelligence demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Hub code (e.g. ATL), or "All Hubs"
    #[arg(long, default_value = "All Hubs")]
    hub: String,

    /// Status label (e.g. Delayed), or "All Statuses"
    #[arg(long, default_value = "All Statuses")]
    status: String,

    /// Time range label: "Next 2 hours", "Next 6 hours", Today, Tomorrow,
    /// "Last 7 days"
    #[arg(long, default_value = "Today")]
    range: String,
}

impl FilterArgs {
    fn to_filter(&self) -> FilterState {
        FilterState::from_labels(&self.hub, &self.status, &self.range)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the departures board
    Board(FilterArgs),
    /// Show the operations summary counts
    Summary(FilterArgs),
    /// Show the trailing-week on-time performance trend
    Trend(FilterArgs),
    /// Show delay counts by cause
    Causes(FilterArgs),
    /// Show the top hubs by cancellations
    Cancellations(FilterArgs),
    /// Show per-hub operational status
    Hubs(FilterArgs),
    /// Chat with the intelligence agent
    Chat {
        /// Completion model: llama3.1-70b, llama3.1-8b, or mistral-large
        #[arg(long, default_value = "llama3.1-70b")]
        model: String,
    },
    /// Manage the warehouse-side assistant agent
    Agent {
        #[command(subcommand)]
        action: AgentAction,
    },
}

#[derive(Subcommand)]
enum AgentAction {
    /// Create the assistant agent in the warehouse and describe it
    Register,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Board(args) => {
            commands::dashboard::show(QuerySite::FlightBoard, args.to_filter()).await?
        }
        Commands::Summary(args) => {
            commands::dashboard::show(QuerySite::OpsSummary, args.to_filter()).await?
        }
        Commands::Trend(args) => {
            commands::dashboard::show(QuerySite::OtpTrend, args.to_filter()).await?
        }
        Commands::Causes(args) => {
            commands::dashboard::show(QuerySite::DelayCauses, args.to_filter()).await?
        }
        Commands::Cancellations(args) => {
            commands::dashboard::show(QuerySite::CancellationsByHub, args.to_filter()).await?
        }
        Commands::Hubs(args) => {
            commands::dashboard::show(QuerySite::HubStatus, args.to_filter()).await?
        }
        Commands::Chat { model } => commands::chat::run(&model).await?,
        Commands::Agent { action } => match action {
            AgentAction::Register => commands::agent::register().await?,
        },
    }

    Ok(())
}
