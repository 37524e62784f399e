use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::payroll::PayrollRunner;
use payroll_engine::store::{
    InMemoryBonusLedger, InMemoryEmployeeDirectory, InMemoryInfractionLedger,
    InMemoryTransactionStore,
};

const DEFAULT_CONFIG_DIR: &str = "./config/payroll";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default().with(
        fmt::layer()
            .with_ansi(true)
            .with_line_number(true)
            .with_filter(filter),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    let config_dir =
        std::env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let settings = config.settings().clone();
    let bind_address = config.server().bind_address.clone();
    let seed = config.into_seed();

    info!(
        config_dir = %config_dir,
        employees = seed.employees.len(),
        infractions = seed.infractions.len(),
        bonuses = seed.bonuses.len(),
        "Loaded payroll configuration"
    );

    let runner = PayrollRunner::new(
        Arc::new(InMemoryEmployeeDirectory::new(seed.employees)),
        Arc::new(InMemoryInfractionLedger::new(seed.infractions)),
        Arc::new(InMemoryBonusLedger::new(seed.bonuses)),
        Arc::new(InMemoryTransactionStore::new()),
        settings,
    );
    let app = create_router(AppState::new(runner));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Payroll engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
