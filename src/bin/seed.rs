//! Catalog seed tool
//!
//! Loads the bundled UAE attractions dataset into the database. Rows that
//! already exist (same name and emirate, not deleted) are skipped, so the
//! tool can be re-run safely.

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rehla_server::{
    config::AppConfig,
    models::{attraction::CreateAttraction, enums::StaffRole},
    repository::Repository,
    services::auth::hash_password,
};

const ATTRACTIONS_JSON: &str = include_str!("../../data/attractions.json");
const BATCH_SIZE: usize = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rehla_seed=info,rehla_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let attractions: Vec<CreateAttraction> = serde_json::from_str(ATTRACTIONS_JSON)?;
    tracing::info!("Loaded {} attractions from bundled dataset", attractions.len());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Repository::new(pool);

    ensure_admin_account(&repository).await?;

    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for (batch_no, batch) in attractions.chunks(BATCH_SIZE).enumerate() {
        for attraction in batch {
            match repository.attractions.create_if_absent(attraction).await? {
                Some(row) => {
                    tracing::debug!("Inserted attraction {} ({})", row.name, row.emirate);
                    inserted += 1;
                }
                None => {
                    skipped += 1;
                }
            }
        }
        tracing::info!(
            "Batch {} done ({} rows processed)",
            batch_no + 1,
            (batch_no * BATCH_SIZE) + batch.len()
        );
    }

    tracing::info!(
        "Seeding complete: {} inserted, {} already present",
        inserted,
        skipped
    );

    Ok(())
}

/// Create the default admin account if no "admin" user exists yet.
///
/// The password comes from REHLA_ADMIN_PASSWORD; without it a placeholder is
/// used and a warning is logged.
async fn ensure_admin_account(repository: &Repository) -> anyhow::Result<()> {
    if repository.staff.get_by_username("admin").await?.is_some() {
        tracing::debug!("Admin account already exists, skipping");
        return Ok(());
    }

    let password = match std::env::var("REHLA_ADMIN_PASSWORD") {
        Ok(p) if !p.is_empty() => p,
        _ => {
            tracing::warn!(
                "REHLA_ADMIN_PASSWORD not set, using placeholder password 'change-me-now'"
            );
            "change-me-now".to_string()
        }
    };

    let password_hash = hash_password(&password)?;
    repository
        .staff
        .create("admin", &password_hash, Some("Administrator"), None, StaffRole::Admin)
        .await?;
    tracing::info!("Created default admin account");

    Ok(())
}
