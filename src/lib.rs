// Library exports for testing
pub mod audit;
pub mod config;
pub mod handlers;
pub mod models;
pub mod store;

use crate::audit::logger::AuditLogger;
use crate::store::CredentialStore;

/// Shared application state carried by the router.
#[derive(Clone)]
pub struct AppState {
    pub store: CredentialStore,
    pub audit: AuditLogger,
}
