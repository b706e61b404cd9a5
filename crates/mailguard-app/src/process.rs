//! Message processing
//!
//! Runs TEA messages through [`handler::update`] until no follow-up remains,
//! dispatching any actions along the way.

use std::sync::Arc;

use tokio::sync::mpsc;

use mailguard_client::Classifier;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    classifier: &Arc<C>,
) where
    C: Classifier + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(classifier));
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use mailguard_client::test_utils::StaticClassifier;
    use mailguard_core::Verdict;

    #[tokio::test]
    async fn test_submit_round_trip_opens_popup() {
        let (tx, mut rx) = mpsc::channel(8);
        let classifier = Arc::new(StaticClassifier::spam());
        let mut state = AppState::new();

        for c in "Win a free prize now!!!".chars() {
            process_message(&mut state, Message::Key(InputKey::Char(c)), &tx, &classifier);
        }
        process_message(&mut state, Message::Key(InputKey::CharCtrl('s')), &tx, &classifier);
        assert!(state.checker.is_loading());

        let reply = rx.recv().await.expect("classification reply");
        process_message(&mut state, reply, &tx, &classifier);

        assert!(!state.checker.is_loading());
        assert!(state.checker.popup_visible());
        assert_eq!(state.checker.verdict(), Some(Verdict::Spam));
        assert_eq!(classifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_submit_dispatches_nothing() {
        let (tx, mut rx) = mpsc::channel(8);
        let classifier = Arc::new(StaticClassifier::spam());
        let mut state = AppState::new();

        process_message(&mut state, Message::Submit, &tx, &classifier);
        drop(tx);

        assert!(rx.recv().await.is_none());
        assert_eq!(classifier.calls(), 0);
        assert!(!state.checker.is_loading());
    }

    #[tokio::test]
    async fn test_failed_round_trip_shows_reason() {
        let (tx, mut rx) = mpsc::channel(8);
        let classifier = Arc::new(StaticClassifier::failing("refused"));
        let mut state = AppState::new();

        process_message(&mut state, Message::Paste("hello".into()), &tx, &classifier);
        process_message(&mut state, Message::Submit, &tx, &classifier);

        let reply = rx.recv().await.expect("classification reply");
        process_message(&mut state, reply, &tx, &classifier);

        assert!(!state.checker.is_loading());
        assert!(!state.checker.popup_visible());
        assert!(state.checker.failure().is_some());
    }
}
