//! Startup sequence shared by the server binary and the CLI.

use anyhow::Context;
use pawhaven_kernel::settings::Settings;
use pawhaven_kernel::{AppState, InitCtx, ModuleRegistry};
use sqlx::SqlitePool;

use crate::modules;

/// A connected, initialized and migrated application, not yet started.
pub struct App {
    pub settings: Settings,
    pub registry: ModuleRegistry,
    pub db: SqlitePool,
}

/// Connect storage, register and initialize modules, then apply migrations.
pub async fn prepare(settings: Settings) -> anyhow::Result<App> {
    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url,
        "pawhaven bootstrap starting"
    );

    let db = pawhaven_db::connect(&settings.database)
        .await
        .context("failed to connect to the pet store")?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
        db: &db,
    };
    registry.init_modules(&ctx).await?;

    let applied = pawhaven_db::run_migrations(&db, &registry.collect_migrations())
        .await
        .context("failed to apply migrations")?;
    tracing::info!(applied, "migrations up to date");

    Ok(App {
        settings,
        registry,
        db,
    })
}

impl App {
    /// Run every module's `start` hook. The pets module seeds here.
    pub async fn start(&self) -> anyhow::Result<()> {
        let ctx = InitCtx {
            settings: &self.settings,
            db: &self.db,
        };
        self.registry.start_modules(&ctx).await
    }

    /// Start modules, serve HTTP until Ctrl-C, then stop modules.
    pub async fn serve(self) -> anyhow::Result<()> {
        self.start().await?;

        let state = AppState::new(self.db.clone(), self.settings.clone());
        pawhaven_http::start_server(&self.registry, state).await?;

        self.registry.stop_modules().await?;
        self.db.close().await;
        tracing::info!("pawhaven stopped");
        Ok(())
    }
}

/// Full server lifecycle from the environment's configuration.
pub async fn run() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load PawHaven settings")?;
    pawhaven_telemetry::init(&settings.telemetry)?;

    prepare(settings).await?.serve().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::pets::repository::PetRepository;

    fn settings_for(dir: &std::path::Path, seed: bool) -> Settings {
        let mut settings = Settings::default();
        settings.database.url = format!("sqlite://{}", dir.join("pets.db").display());
        settings.seed.enabled = seed;
        settings
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pawhaven-bootstrap-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn start_seeds_once_across_restarts() {
        let dir = scratch_dir("reseed");

        let app = prepare(settings_for(&dir, true)).await.unwrap();
        app.start().await.unwrap();
        assert_eq!(PetRepository::new(app.db.clone()).count().await.unwrap(), 5);
        app.db.close().await;

        let app = prepare(settings_for(&dir, true)).await.unwrap();
        app.start().await.unwrap();
        assert_eq!(PetRepository::new(app.db.clone()).count().await.unwrap(), 5);
        app.db.close().await;

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn seeding_can_be_disabled() {
        let dir = scratch_dir("noseed");

        let app = prepare(settings_for(&dir, false)).await.unwrap();
        app.start().await.unwrap();
        assert_eq!(PetRepository::new(app.db.clone()).count().await.unwrap(), 0);
        app.db.close().await;

        std::fs::remove_dir_all(&dir).ok();
    }
}
