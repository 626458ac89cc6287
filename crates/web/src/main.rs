use std::sync::Arc;

use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;

mod config;
mod error;
mod extract;
mod features;
mod pipeline;
mod routes;
mod state;

use config::Config;
use features::{athletes, categories, training_centers};
use state::{ApiSettings, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::create_category,
        training_centers::handlers::list_training_centers,
        training_centers::handlers::get_training_center,
        training_centers::handlers::create_training_center,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummary,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::category::CategoryRef,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::training_center::TrainingCenterRef,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete endpoints"),
        (name = "categories", description = "Category endpoints"),
        (name = "training-centers", description = "Training center endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Workout API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        max_page_limit = config.max_page_limit,
        mutable_fields = ?config.athlete_mutable_fields,
        "Configuration loaded successfully"
    );

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState::new(Arc::new(db), ApiSettings::from(&config));
    let app = routes::router(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
