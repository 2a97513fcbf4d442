use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pawhaven_app::modules::pets::{repository::PetRepository, seed::seed_if_empty};
use pawhaven_kernel::settings::Settings;

/// PawHaven pet adoption backend
#[derive(Parser, Debug)]
#[command(name = "pawhaven-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding base.toml and the per-environment overlays
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Environment overlay to apply (local, staging, production)
    #[arg(long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run migrations, seed if enabled and serve HTTP until Ctrl-C
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Apply migrations and insert the demo pets into an empty store
    Seed,
    /// Print the resolved settings as JSON
    Config,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<Settings> {
        if self.config_dir.is_none() && self.env.is_none() {
            return Settings::load();
        }

        let dir = self
            .config_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("config"));
        let env = match &self.env {
            Some(env) => env.clone(),
            None => std::env::var("PAWHAVEN_ENV").unwrap_or_else(|_| "local".to_string()),
        };
        Settings::load_from(&dir, &env)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli
        .settings()
        .context("failed to load PawHaven settings")?;

    if let Command::Config = cli.command {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    pawhaven_telemetry::init(&settings.telemetry)?;
    let app = pawhaven_app::prepare(settings).await?;

    match cli.command {
        Command::Serve => app.serve().await?,
        Command::Migrate => {
            let pets = PetRepository::new(app.db.clone()).count().await?;
            println!("migrations up to date ({pets} pets stored)");
            app.db.close().await;
        }
        Command::Seed => {
            let inserted = seed_if_empty(&PetRepository::new(app.db.clone())).await?;
            println!("seeded {inserted} pets");
            app.db.close().await;
        }
        Command::Config => {}
    }

    Ok(())
}
