//! Bounded single-writer channel carrying progress events for one run.
//!
//! The orchestrator holds the sender and the transport adapter drains the
//! receiver. Consumer-side cancellation is signalled by dropping the
//! receiver: the next `emit` fails and the producer stops.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::types::ProgressEvent;

/// Default capacity. A four-advisor run emits at most nine events, so a
/// small buffer absorbs a briefly slow consumer without unbounded growth.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// The consumer went away; no further events will be delivered.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("progress channel closed by consumer")]
pub struct StreamClosed;

pub type ProgressReceiver = mpsc::Receiver<ProgressEvent>;

/// Writer half of a run's progress channel.
#[derive(Debug, Clone)]
pub struct ProgressSender {
    tx: mpsc::Sender<ProgressEvent>,
}

impl ProgressSender {
    /// Push one event, in emission order. Fails only when the receiver
    /// has been dropped.
    pub async fn emit(&self, event: ProgressEvent) -> Result<(), StreamClosed> {
        self.tx.send(event).await.map_err(|_| StreamClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Create a progress channel with the given capacity.
pub fn progress_channel(capacity: usize) -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ProgressSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_core::{Advisor, Recommendation};

    fn advisor() -> Advisor {
        Advisor::new("ada", "Ada", "CTO", "✦", "You are Ada, CTO.")
    }

    #[tokio::test]
    async fn test_events_arrive_in_emission_order() {
        let (tx, mut rx) = progress_channel(DEFAULT_CHANNEL_CAPACITY);
        let a = advisor();

        tx.emit(ProgressEvent::thinking(&a)).await.unwrap();
        tx.emit(ProgressEvent::error(&a, "boom")).await.unwrap();
        tx.emit(ProgressEvent::summary(10, vec![], Recommendation::Go))
            .await
            .unwrap();

        assert_eq!(rx.recv().await.unwrap().kind(), "thinking");
        assert_eq!(rx.recv().await.unwrap().kind(), "error");
        assert_eq!(rx.recv().await.unwrap().kind(), "summary");
    }

    #[tokio::test]
    async fn test_emit_fails_after_receiver_dropped() {
        let (tx, rx) = progress_channel(4);
        drop(rx);

        let result = tx.emit(ProgressEvent::thinking(&advisor())).await;
        assert_eq!(result, Err(StreamClosed));
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn test_channel_closes_when_sender_dropped() {
        let (tx, mut rx) = progress_channel(4);

        tx.emit(ProgressEvent::summary(10, vec![], Recommendation::Go))
            .await
            .unwrap();
        drop(tx);

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_zero_capacity_is_clamped() {
        let (tx, mut rx) = progress_channel(0);
        tx.emit(ProgressEvent::thinking(&advisor())).await.unwrap();
        assert!(rx.recv().await.is_some());
    }
}
