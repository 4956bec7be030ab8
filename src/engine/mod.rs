// ============================================================================
// Engine Module
// Contains the core discrete auction business logic
// ============================================================================

mod curve_builder;
mod discrete_auction;
mod feasibility;
mod matcher;

pub mod factory;

pub use curve_builder::{best_price, build_buy_curve, build_sell_curve, AuctionCurves};
pub use discrete_auction::DiscreteAuction;
pub use factory::{create_from_config, DiscreteAuctionBuilder};
pub use feasibility::is_feasible;
pub use matcher::{match_curves, CumulativeCurveMatcher};
