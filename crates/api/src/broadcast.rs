//! Broadcast coordinator: push-invalidate-with-fresh-read.
//!
//! After every successful mutation the coordinator re-runs the
//! authoritative list for the mutated kind and pushes the FULL collection
//! to every subscriber under the kind's event name. No diffs, no
//! per-subscriber state: collections are small and human-driven, so
//! resending everything keeps clients merge-free.
//!
//! An explicitly constructed, owned dependency carried in `AppState` — not
//! a process-wide global — so the handlers that broadcast stay testable
//! without a live network stub.

use std::sync::Arc;

use axum::extract::ws::Message;
use serde::Serialize;

use dispatch_db::resource::BoardResource;
use dispatch_db::DbPool;

use crate::ws::WsManager;

/// One pushed frame: the event name for a resource kind plus the full
/// current collection for that kind.
#[derive(Serialize)]
struct BoardFrame<'a, T: Serialize> {
    event: &'static str,
    data: &'a [T],
}

/// Re-reads authoritative state and fans it out to all subscribers.
pub struct Broadcaster {
    pool: DbPool,
    ws_manager: Arc<WsManager>,
}

impl Broadcaster {
    pub fn new(pool: DbPool, ws_manager: Arc<WsManager>) -> Self {
        Self { pool, ws_manager }
    }

    /// Push the current collection for `R` to every subscriber.
    ///
    /// The triggering mutation has already committed, so a failed re-read
    /// only logs and skips the push: a stale dashboard is the worst case,
    /// and the next successful mutation or a client reconnect fetch
    /// restores consistency. Never retried on a timer, never propagated
    /// back to the triggering request.
    pub async fn notify<R: BoardResource>(&self) {
        let rows = match R::list(&self.pool).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(event = R::EVENT, error = %e, "Broadcast re-read failed; push skipped");
                return;
            }
        };

        let frame = BoardFrame {
            event: R::EVENT,
            data: &rows,
        };
        let text = match serde_json::to_string(&frame) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(event = R::EVENT, error = %e, "Failed to serialize broadcast frame");
                return;
            }
        };

        self.ws_manager.broadcast(Message::Text(text.into())).await;
        tracing::debug!(event = R::EVENT, rows = rows.len(), "Board update broadcast");
    }
}
