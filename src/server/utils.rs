//! Server utility functions

use crate::utils::error::GatewayError;

/// Turn a bind failure into an actionable message
pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> GatewayError {
    if error.kind() == std::io::ErrorKind::AddrInUse {
        return GatewayError::server(format!(
            "Port {} is already in use. Stop the other process or start with --port <PORT> / VOICE_TODO_PORT.",
            port
        ));
    }
    GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, error))
}
