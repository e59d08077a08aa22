use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use parcel_wizard::config::Config;
use parcel_wizard::error::AppResult;
use parcel_wizard::messaging::TracingReporter;
use parcel_wizard::tariffs::{self, company_id_from_path, TariffClient, TariffForm, TariffSelect, CDEK_API_TYPE};
use parcel_wizard::wizard::{
    get_progress, get_progress_text, next_step_for_id, HistoryState, NavigationContext, OffersHandoff,
    Transition, WizardAction, WizardData, WizardFlow,
};

const LOG_TARGET_STARTUP: &str = "parcel_wizard::startup";

#[derive(Parser)]
#[command(name = "parcel-wizard", version, about = "Booking assistant step sequencer and tariff loader")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the assistant wizard against a JSON snapshot
    Step {
        /// Snapshot file, or `-` for stdin
        #[arg(long, default_value = "-")]
        snapshot: String,
    },

    /// Load carrier tariffs the way the transport company admin page does
    Tariffs(TariffArgs),

    /// Decode an offers hand-off `data` parameter
    DecodeHandoff { data: String },
}

#[derive(Args)]
struct TariffArgs {
    /// Saved transport company id
    #[arg(long, conflicts_with = "admin_path")]
    company_id: Option<u64>,

    /// Admin change-page path to take the company id from
    #[arg(long)]
    admin_path: Option<String>,

    #[arg(long, default_value = CDEK_API_TYPE)]
    api_type: String,

    #[arg(long, default_value = "")]
    account: String,

    #[arg(long, default_value = "")]
    password: String,

    #[arg(long)]
    from: String,

    #[arg(long)]
    to: String,

    #[arg(long)]
    weight: String,

    /// Overrides `tariff_api_base_url` from the config
    #[arg(long)]
    base_url: Option<String>,
}

/// What the host shell knows at the moment of evaluation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snapshot {
    /// URL or path with query string
    location: String,
    state: HistoryState,
    data: WizardData,
    /// Step currently shown; resolved from navigation when absent
    current_step: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StepReport {
    initial_step: String,
    current_step: String,
    next: Option<Transition>,
    progress: u8,
    progress_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    offers_url: Option<String>,
}

/// Initialize tracing with file rotation
///
/// Logs go to `<config dir>/ParcelWizard/logs/parcel-wizard.YYYY-MM-DD.log`.
/// Debug builds also log to stderr; stdout is reserved for command output.
fn initialize_tracing(log_dir: &Path) {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(log_dir, "parcel-wizard.log");

    // Configure filter (info level by default)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!(target: LOG_TARGET_STARTUP, "Log directory: {}", log_dir.display());
}

fn load_config(path: Option<&Path>) -> AppResult<Config> {
    let config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    config.context("Failed to load configuration")
}

fn read_snapshot(source: &str) -> AppResult<Snapshot> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read snapshot {}", source))?
    };

    serde_json::from_str(&content).context("Snapshot is not valid JSON")
}

fn run_step(source: &str) -> AppResult<()> {
    let snapshot = read_snapshot(source)?;
    let nav = NavigationContext::from_location(&snapshot.location, snapshot.state);

    let mut data = snapshot.data;
    if let Some(handoff) = nav.handoff() {
        handoff.fill_missing(&mut data);
    }

    let flow = WizardFlow::resume(&nav, &data, Box::new(TracingReporter));
    let initial = flow.current_step();
    let current = snapshot
        .current_step
        .unwrap_or_else(|| initial.as_str().to_string());

    let next = next_step_for_id(&current, &data);
    let offers_url = match next {
        Some(Transition::Action(WizardAction::NavigateToOffers)) => Some(
            OffersHandoff::for_recipient(&data, &nav)
                .offers_url()
                .context("Failed to encode offers hand-off")?,
        ),
        _ => None,
    };

    let report = StepReport {
        initial_step: initial.as_str().to_string(),
        progress: get_progress(&current, &data.auth),
        progress_text: get_progress_text(&current),
        current_step: current,
        next,
        offers_url,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_tariffs(config: &Config, args: TariffArgs) -> AppResult<()> {
    let company_id = args
        .company_id
        .or_else(|| args.admin_path.as_deref().and_then(company_id_from_path));

    let form = TariffForm {
        company_id,
        api_type: args.api_type,
        api_account: args.account,
        api_secure_password: args.password,
        test_from_city: args.from,
        test_to_city: args.to,
        test_weight: args.weight,
    };

    let base_url = args.base_url.unwrap_or_else(|| config.tariff_api_base_url.clone());
    let client = TariffClient::new(&base_url, config.request_timeout());
    let mut select = TariffSelect::new();

    let loaded = tariffs::load_into(&client, &form, &mut select);

    for option in &select.options {
        if option.value.is_empty() {
            println!("{}", option.label);
        } else {
            println!("{}\t{}", option.value, option.label);
        }
    }

    let count = loaded.context("Tariff lookup failed")?;
    tracing::info!("Listed {} tariffs", count);
    Ok(())
}

fn run_decode_handoff(data: &str) -> AppResult<()> {
    let payload = OffersHandoff::decode(data).context("Failed to decode hand-off payload")?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    initialize_tracing(&config.resolved_log_dir());
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting parcel-wizard v{} on ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    );

    match cli.command {
        Commands::Step { snapshot } => run_step(&snapshot),
        Commands::Tariffs(args) => run_tariffs(&config, args),
        Commands::DecodeHandoff { data } => run_decode_handoff(&data),
    }
}
