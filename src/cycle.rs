//! # Submission Cycle
//!
//! Drives one `Submit` through to settlement without a UI: the reducer
//! decides, the client answers, the reducer applies the outcome.
//! Used by `--question` mode and by the integration tests. The TUI does
//! the same thing, except the await happens on a spawned task.

use log::debug;

use crate::client::AnswerClient;
use crate::core::action::{Action, Effect, update};
use crate::core::state::Session;

/// Submits `text` and waits for the outcome message to land.
///
/// Returns `false` if the submission was not accepted (empty text or a
/// request already in flight); in that case nothing was sent.
pub async fn submit_and_settle(
    session: &mut Session,
    client: &dyn AnswerClient,
    text: String,
) -> bool {
    match update(session, Action::Submit(text)) {
        Effect::SpawnRequest(question) => {
            debug!("Asking via {} client", client.name());
            let outcome = client.ask(&question).await;
            update(session, Action::Settled(outcome));
            true
        }
        _ => false,
    }
}
