use anyhow::{Context, Result};
use finexp::{logging, FixtureSet, SeedConfig, Seeder, SqliteStore};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    logging::init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ Seed failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = SeedConfig::from_env().context("reading seed configuration")?;

    let store = SqliteStore::open(&config.database_path)
        .with_context(|| format!("opening {}", config.database_path.display()))?;
    info!("✓ Database opened: {}", config.database_path.display());

    let outcome = Seeder::new(&store)
        .with_bcrypt_cost(config.bcrypt_cost)
        .run(
            &config.demo.email,
            &config.demo.name,
            &config.demo.password,
            &FixtureSet::default(),
        );

    // Release the connection whether or not the run succeeded.
    let closed = store.close();
    let report = outcome.context("seeding demo data")?;
    closed.context("closing database")?;

    info!(
        "✓ {} categories created, {} already present; {} transactions, {} budgets added",
        report.categories_created,
        report.categories_existing,
        report.transactions.len(),
        report.budgets.len()
    );
    info!("📝 Demo Account Credentials:");
    info!("Email: {}", report.user.email);
    info!("Password: {}", config.demo.password);

    Ok(())
}
