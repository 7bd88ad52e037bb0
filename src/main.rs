use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::{header, header::HeaderMap, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forum_api::config::Config;
use forum_api::graphql::loaders::user_loader;
use forum_api::graphql::{build_schema, ForumSchema};
use forum_api::middleware::extract_bearer_token;
use forum_api::models::Identity;
use forum_api::routes::{health_router, HealthState};
use forum_api::services::{AuthConfig, AuthService};

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used for convenience
fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([
                        header::AUTHORIZATION,
                        header::CONTENT_TYPE,
                        header::ACCEPT,
                        header::ORIGIN,
                    ])
                    .allow_credentials(true)
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected. Set CORS_ORIGINS to allow cross-origin requests."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!(
                "Using permissive CORS in development mode. \
                 Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

/// GraphQL handler that executes queries against the schema
///
/// Extracts the Bearer token from the Authorization header, verifies it
/// with the credential service, and on success injects an Identity into
/// the GraphQL context so `me` and protected mutations can see the
/// caller. Verification failures are logged and degrade to an anonymous
/// request; anonymous reads remain allowed and protected mutations fail
/// at the resolver with "Not Authenticated".
///
/// A fresh user loader is attached per request so its memoizing cache
/// lives for exactly one request/response cycle.
async fn graphql_handler(
    Extension(schema): Extension<ForumSchema>,
    Extension(auth_service): Extension<AuthService>,
    Extension(pool): Extension<PgPool>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner().data(user_loader(pool));

    if let Some(token) = extract_bearer_token(&headers) {
        match auth_service.verify_token(token) {
            Ok(claims) => {
                request = request.data(Identity::from(claims));
                tracing::debug!("GraphQL request authenticated");
            }
            Err(e) => {
                tracing::debug!(error = %e, "GraphQL auth token verification failed");
            }
        }
    }

    schema.execute(request).await.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting forum API server on port {}", config.port);

    // Initialize database pool against the existing schema
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database_connect_timeout_secs,
        ))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connection established");

    // Create the credential service with the process-wide secret
    let auth_config = AuthConfig::with_ttl(config.jwt_secret.clone(), config.jwt_ttl_secs);
    let auth_service = AuthService::new(auth_config);
    tracing::info!("AuthService initialized");

    // Build the GraphQL schema with repositories and loaders
    let schema = build_schema(pool.clone(), auth_service.clone());
    tracing::info!("GraphQL schema built");

    let cors_layer = build_cors_layer(&config);
    let health_state = HealthState::new(pool.clone());

    // Build the router
    let app = Router::new()
        .route("/", get(root))
        .route("/graphql", post(graphql_handler))
        .route("/graphql/playground", get(graphql_playground))
        .nest("/health", health_router(health_state))
        .layer(Extension(schema))
        .layer(Extension(auth_service))
        .layer(Extension(pool))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL Playground available at http://{}:{}/graphql/playground",
        addr.ip(),
        addr.port()
    );

    axum::serve(listener, app).await?;

    Ok(())
}

async fn root() -> &'static str {
    "Welcome to the forum API"
}
