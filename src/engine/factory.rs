// ============================================================================
// Discrete Auction Factory
// Creates auctions with proper configuration
// ============================================================================

use crate::domain::config::AuctionConfig;
use crate::engine::{CumulativeCurveMatcher, DiscreteAuction};
use crate::interfaces::{ClearingAlgorithm, EventHandler};
use crate::numeric::{PriceSubunits, Quantity};
use std::ops::RangeInclusive;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a discrete auction from configuration
///
/// # Arguments
/// * `config` - Auction configuration
/// * `event_handler` - Event handler for auction events
///
/// # Returns
/// * `Result<DiscreteAuction, String>` - Configured auction or error
///
/// # Example
/// ```
/// use discrete_auction::prelude::*;
/// use std::sync::Arc;
///
/// let config = AuctionConfig::default().with_max_orders(10_000);
/// let auction = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(auction.config().max_orders, 10_000);
/// ```
pub fn create_from_config(
    config: AuctionConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<DiscreteAuction, String> {
    config.validate()?;

    Ok(DiscreteAuction::new(
        config,
        Box::new(CumulativeCurveMatcher::new()),
        event_handler,
    ))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating discrete auctions with fluent API
///
/// # Example
/// ```
/// use discrete_auction::prelude::*;
/// use std::sync::Arc;
///
/// let auction = DiscreteAuctionBuilder::new()
///     .with_quantity_range(1..=500)
///     .with_price_range(100..=5_000)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// let result = auction.clear(&[Order::sell(10, 1500)], &[Order::buy(10, 2000)]);
/// assert_eq!(result.to_string(), "10 17.50");
/// ```
pub struct DiscreteAuctionBuilder {
    config: AuctionConfig,
    algorithm: Option<Box<dyn ClearingAlgorithm>>,
}

impl DiscreteAuctionBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: AuctionConfig::default(),
            algorithm: None,
        }
    }

    // ========================================================================
    // Input Limits
    // ========================================================================

    /// Replace the whole configuration
    pub fn with_config(mut self, config: AuctionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of input lines
    pub fn with_max_orders(mut self, max_orders: usize) -> Self {
        self.config.max_orders = max_orders;
        self
    }

    /// Set the acceptable quantity range
    pub fn with_quantity_range(mut self, range: RangeInclusive<Quantity>) -> Self {
        self.config.quantity_range = range;
        self
    }

    /// Set the acceptable price range, in subunits
    pub fn with_price_range(mut self, range: RangeInclusive<PriceSubunits>) -> Self {
        self.config.price_range = range;
        self
    }

    // ========================================================================
    // Clearing Algorithm
    // ========================================================================

    /// Use a custom clearing algorithm instead of the cumulative-curve matcher
    pub fn with_algorithm(mut self, algorithm: Box<dyn ClearingAlgorithm>) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the auction
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<DiscreteAuction, String> {
        self.config.validate()?;

        let algorithm: Box<dyn ClearingAlgorithm> = match self.algorithm {
            Some(algorithm) => algorithm,
            None => Box::new(CumulativeCurveMatcher::new()),
        };

        Ok(DiscreteAuction::new(self.config, algorithm, event_handler))
    }
}

impl Default for DiscreteAuctionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
