use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::races::handlers::list_races,
        features::races::handlers::get_race,
        features::catalog::handlers::list_trophies,
        features::catalog::handlers::list_flags,
        features::catalog::handlers::list_leagues,
        features::catalog::handlers::list_clubs,
        features::health::handlers::health,
    ),
    components(
        schemas(
            storage::dto::common::PaginationMeta,
            storage::dto::race::RaceResponse,
            storage::dto::race::TrophyInfo,
            storage::dto::race::FlagInfo,
            storage::dto::race::LeagueInfo,
            storage::dto::participant::ParticipantResponse,
            storage::dto::participant::ClubInfo,
            storage::dto::participant::PenaltyResponse,
            storage::models::Trophy,
            storage::models::Flag,
            storage::models::League,
            storage::models::Club,
            features::health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "races", description = "Race search and race details"),
        (name = "catalog", description = "Trophies, flags, leagues and clubs"),
        (name = "health", description = "Liveness and database reachability"),
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

    tracing::info!("Starting regatta results API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

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

    let app = features::router(db).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
