use std::sync::Arc;

use crate::broadcast::Broadcaster;
use crate::config::ServerConfig;
use crate::gate::SessionGate;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: dispatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (dashboard subscribers).
    pub ws_manager: Arc<WsManager>,
    /// Broadcast coordinator; re-reads and pushes after every mutation.
    pub broadcaster: Arc<Broadcaster>,
    /// Session gate guarding the admin surface.
    pub gate: Arc<dyn SessionGate>,
}
