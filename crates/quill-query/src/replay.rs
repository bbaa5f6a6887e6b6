//! Startup replay: re-derive the view from the full event history.
//!
//! Runs before the service starts accepting traffic. Re-entrant by
//! construction — a crash mid-replay followed by another replay applies a
//! prefix twice, which the projector's idempotence absorbs. Live events
//! racing a replay in progress converge the same way.

use quill_core::log::EventLog;

use crate::projector::Projector;

/// Fetches the complete history and applies it in order through `projector`.
///
/// A fetch failure is logged and tolerated: the service starts with
/// whatever state its store already holds rather than refusing to boot.
pub async fn run(log: &dyn EventLog, projector: &Projector) {
    match log.read_all().await {
        Ok(history) => {
            let count = history.len();
            for envelope in &history {
                projector.apply(envelope).await;
            }
            tracing::info!(events = count, "replay complete");
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                "replay fetch failed; serving with existing (possibly partial) state"
            );
        }
    }
}
