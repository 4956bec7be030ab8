// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod clearing_algorithm;
mod event_handler;

pub use clearing_algorithm::ClearingAlgorithm;
pub use event_handler::{
    AuctionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
