//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use mailguard_client::Classifier;
use mailguard_core::EmailText;

use crate::checker::RequestId;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, classifier: Arc<C>)
where
    C: Classifier + Sync + 'static,
{
    match action {
        UpdateAction::ClassifyEmail { request_id, text } => {
            tokio::spawn(async move {
                let msg = classify_email(classifier.as_ref(), request_id, &text).await;
                if msg_tx.send(msg).await.is_err() {
                    debug!("Event loop gone before request {} finished", request_id);
                }
            });
        }
    }
}

/// Run one classification and turn the outcome into a message
pub async fn classify_email<C>(classifier: &C, request_id: RequestId, text: &EmailText) -> Message
where
    C: Classifier + Sync,
{
    info!(
        "Classifying request {} ({} chars)",
        request_id,
        text.char_count()
    );

    match classifier.classify(text).await {
        Ok(verdict) => {
            info!("Request {} classified as {}", request_id, verdict);
            Message::ClassificationCompleted {
                request_id,
                verdict,
            }
        }
        Err(e) => {
            if e.is_recoverable() {
                warn!("Request {} failed: {}", request_id, e);
            } else {
                error!("Request {} failed: {}", request_id, e);
            }
            Message::ClassificationFailed {
                request_id,
                reason: e.user_message(),
            }
        }
    }
}
