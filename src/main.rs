use auth_audit_api::audit::logger::AuditLogger;
use auth_audit_api::audit::sink::FileAuditSink;
use auth_audit_api::config::AppConfig;
use auth_audit_api::store::CredentialStore;
use auth_audit_api::{handlers, AppState};

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_audit_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to resolve configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Open the audit log once; it stays open for the process lifetime
    let sink = match FileAuditSink::open(&config.audit_log_path) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::error!("Failed to open audit log: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: CredentialStore::new(),
        audit: AuditLogger::new(Arc::new(sink)),
    };

    let app = handlers::create_router(state, &config.static_dir);

    tracing::info!("🚀 Starting auth audit API server on {}", config.bind_addr);
    tracing::info!("📖 Auth routes: POST /register, POST /login");
    tracing::info!(
        "📝 Audit trail: {}",
        config.audit_log_path.display()
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
