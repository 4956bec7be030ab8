// ============================================================================
// Event Handler Interface
// Defines the contract for observing auction runs
// ============================================================================

use crate::domain::AuctionId;
use crate::numeric::Quantity;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while clearing an auction
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AuctionEvent {
    /// Order sets handed to the auction
    OrdersReceived {
        auction_id: AuctionId,
        sell_orders: usize,
        buy_orders: usize,
        timestamp: DateTime<Utc>,
    },

    /// Cumulative curves built from the feasible orders
    CurvesBuilt {
        auction_id: AuctionId,
        sell_levels: usize,
        buy_levels: usize,
        timestamp: DateTime<Utc>,
    },

    /// Clearing price found
    Cleared {
        auction_id: AuctionId,
        quantity: Quantity,
        price: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// No quantity can change hands
    NoDeal {
        auction_id: AuctionId,
        timestamp: DateTime<Utc>,
    },
}

impl AuctionEvent {
    pub fn auction_id(&self) -> AuctionId {
        match self {
            AuctionEvent::OrdersReceived { auction_id, .. }
            | AuctionEvent::CurvesBuilt { auction_id, .. }
            | AuctionEvent::Cleared { auction_id, .. }
            | AuctionEvent::NoDeal { auction_id, .. } => *auction_id,
        }
    }
}

/// Event handler trait for processing auction events
/// Implementations can handle logging, metrics, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an auction event
    fn on_event(&self, event: AuctionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<AuctionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: AuctionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: AuctionEvent) {
        tracing::debug!("Discrete auction event: {:?}", event);
    }
}

/// Keeps every event it receives
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<AuctionEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<AuctionEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<AuctionEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: AuctionEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<AuctionEvent>) {
        self.events.lock().extend(events);
    }
}
