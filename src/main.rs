//! energy-calc entry point: CLI wiring and config-driven session construction.

use std::process;

use tracing_subscriber::EnvFilter;

use energy_calc::calc::AggregationParameters;
use energy_calc::cli::{self, CliOptions};
use energy_calc::config::HouseholdConfig;
use energy_calc::devices::FieldValue;
use energy_calc::io::export::export_csv;
use energy_calc::session::Session;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &CliOptions) -> HouseholdConfig {
    let config = match cli.config {
        Some(ref path) => HouseholdConfig::from_toml_file(path).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        }),
        None => HouseholdConfig::default(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    config
}

/// Builds the session: config overrides, then CLI toggles and pricing.
fn build_session(cli: &CliOptions, config: &HouseholdConfig) -> Session {
    let mut session = config.session();

    for (id, enabled) in &cli.toggles {
        let Some(index) = session.registry().position(id) else {
            eprintln!("error: unknown device \"{id}\" (see --list)");
            process::exit(1);
        };
        session.registry_mut().toggle_enabled(index, *enabled);
    }

    if cli.unit_cost.is_some() || cli.days.is_some() {
        let unit_cost = cli
            .unit_cost
            .clone()
            .map_or_else(|| config.pricing.unit_cost.clone(), FieldValue::from);
        let days = cli
            .days
            .clone()
            .map_or_else(|| config.pricing.billing_days_per_month.clone(), FieldValue::from);
        session.set_parameters(AggregationParameters::from_inputs(unit_cost, days));
    }

    session
}

fn main() {
    let cli = cli::parse_args().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        cli::print_usage();
        process::exit(1);
    });

    // The TUI owns the terminal; log output would corrupt it.
    if !cli.tui {
        init_tracing();
    }

    let config = load_config(&cli);
    let mut session = build_session(&cli, &config);
    let currency = config.display.currency.clone();

    if cli.list {
        for (i, record) in session.snapshot().iter().enumerate() {
            println!("{i:>2} {:<12} {record}", record.id);
        }
        return;
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        energy_calc::tui::run(session, &currency);
        return;
    }

    let result = session.calculate().clone();
    println!("{}", result.report(&currency));

    if let Some(ref path) = cli.csv_out {
        if let Err(e) = export_csv(&result, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Breakdown written to {}", path.display());
    }

    #[cfg(feature = "api")]
    if cli.serve {
        serve(session, &currency, cli.port);
    }
}

/// Serves the calculated session over HTTP until the process is stopped.
#[cfg(feature = "api")]
fn serve(session: Session, currency: &str, port: u16) {
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let state = energy_calc::api::AppState::new(session, currency);
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    rt.block_on(energy_calc::api::serve(state, addr));
}
