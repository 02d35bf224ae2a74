//! # Fulfillment
//!
//! Dispatch of verified webhook events to a fulfillment handler. Only the
//! two checkout-completion event kinds fulfill; everything else is accepted
//! and ignored. Fulfillment is intended to be idempotent per session.

use crate::event::{ConnectEvent, SessionDetails};
use tracing::{debug, info, warn};

/// Side effect run when a checkout completes
pub trait Fulfillment: Send + Sync {
    /// Fulfill the purchase for a completed session.
    ///
    /// `account` is the connected account the charge was made on behalf of,
    /// when the event carries one.
    fn fulfill(&self, account: Option<&str>, session: &SessionDetails);
}

/// Default fulfillment: log the purchase. This server keeps no order store,
/// so there is nothing else to do with it here.
pub struct LogFulfillment;

impl Fulfillment for LogFulfillment {
    fn fulfill(&self, account: Option<&str>, session: &SessionDetails) {
        info!(
            session_id = %session.id,
            account = account.unwrap_or("none"),
            payment_status = session.payment_status.as_deref().unwrap_or("unknown"),
            amount_total = session.amount_total.unwrap_or(0),
            "checkout session fulfilled"
        );
    }
}

/// Route a verified event to the handler.
///
/// A nested-object shape mismatch (provider API version drift) is logged and
/// dropped; the event was already acknowledged by signature verification, so
/// it is never a reason to fail the request.
pub fn dispatch_event(handler: &dyn Fulfillment, event: &ConnectEvent) {
    if !event.kind.triggers_fulfillment() {
        debug!(event_id = %event.id, event_type = event.kind.as_type(), "event ignored");
        return;
    }

    match SessionDetails::from_object(&event.object) {
        Ok(session) => handler.fulfill(event.account.as_deref(), &session),
        Err(e) => warn!(event_id = %event.id, "could not extract session from event: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFulfillment {
        calls: AtomicUsize,
    }

    impl CountingFulfillment {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Fulfillment for CountingFulfillment {
        fn fulfill(&self, _account: Option<&str>, _session: &SessionDetails) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn completed_event() -> ConnectEvent {
        ConnectEvent {
            id: "evt_test".to_string(),
            kind: EventKind::CheckoutCompleted,
            account: Some("acct_123".to_string()),
            created: 1_700_000_000,
            object: json!({
                "id": "cs_test_123",
                "payment_status": "paid",
                "amount_total": 2000,
                "currency": "usd"
            }),
        }
    }

    #[test]
    fn test_completed_event_fulfills_once() {
        let handler = CountingFulfillment::new();
        dispatch_event(&handler, &completed_event());
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_async_succeeded_event_fulfills() {
        let handler = CountingFulfillment::new();
        let mut event = completed_event();
        event.kind = EventKind::AsyncPaymentSucceeded;
        dispatch_event(&handler, &event);
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_other_events_are_ignored() {
        let handler = CountingFulfillment::new();
        let mut event = completed_event();
        event.kind = EventKind::Other("payment_intent.created".into());
        dispatch_event(&handler, &event);
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shape_mismatch_is_swallowed() {
        let handler = CountingFulfillment::new();
        let mut event = completed_event();
        event.object = json!({"unexpected": true});
        dispatch_event(&handler, &event);
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
    }
}
