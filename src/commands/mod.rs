pub mod analysis;

/// Health check command: verifies the backend is running
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}
