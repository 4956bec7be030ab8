// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod curve;
pub mod order;
pub mod result;

pub use config::AuctionConfig;
pub use curve::{BuyCurve, CurvePoint, SellCurve};
pub use order::{Order, Side};
pub use result::{AuctionId, AuctionResult, NO_DEAL};
