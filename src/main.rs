use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use krok_users::config::Config;
use krok_users::handlers::{DeleteResponse, HealthResponse, MessageResponse};
use krok_users::models::{UserCreate, UserUpdate, UserView};
use krok_users::state::AppState;
use krok_users::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::root,
        handlers::health::health,
        handlers::user::register_user,
        handlers::user::list_users,
        handlers::user::update_user,
        handlers::user::delete_user,
    ),
    components(schemas(
        UserCreate,
        UserUpdate,
        UserView,
        DeleteResponse,
        MessageResponse,
        HealthResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User management endpoints")
    )
)]
struct ApiDoc;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "krok_users=debug,tower_http=info".into());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = Config::from_env().context("load configuration")?;
    init_tracing();

    let addr = config.server_addr();

    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .context("initialize application state")?;
    tracing::info!("Database ready");

    let app = build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
