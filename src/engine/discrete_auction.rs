// ============================================================================
// Discrete Auction
// Orchestrates one clearing run: curves, matching, events
// ============================================================================

use super::curve_builder::AuctionCurves;
use super::matcher::CumulativeCurveMatcher;
use crate::domain::{AuctionConfig, AuctionId, AuctionResult, Order};
use crate::ingest::{read_orders, OrderBatch};
use crate::interfaces::{AuctionEvent, ClearingAlgorithm, EventHandler, NoOpEventHandler};
use chrono::Utc;
use std::io::{self, BufRead};
use std::sync::Arc;

/// Call auction with a pluggable clearing algorithm
///
/// Every call to [`DiscreteAuction::clear`] builds its own curves and keeps
/// nothing afterwards, so one instance can serve concurrent callers.
pub struct DiscreteAuction {
    /// Acceptable order values and input limits
    config: AuctionConfig,

    /// Pluggable clearing algorithm
    algorithm: Box<dyn ClearingAlgorithm>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl DiscreteAuction {
    /// Create a new discrete auction
    pub fn new(
        config: AuctionConfig,
        algorithm: Box<dyn ClearingAlgorithm>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            config,
            algorithm,
            event_handler,
        }
    }

    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    /// Read orders using this auction's limits
    pub fn read<R: BufRead>(&self, reader: R) -> io::Result<OrderBatch> {
        read_orders(reader, &self.config)
    }

    /// Clear one auction over the given sell and buy orders
    ///
    /// Orders are taken as given, without the configured ranges. Volumes
    /// that do not fit a `u64` saturate at `u64::MAX`.
    pub fn clear(&self, sells: &[Order], buys: &[Order]) -> AuctionResult {
        let auction_id = AuctionId::new();
        let mut events = Vec::with_capacity(3);

        events.push(AuctionEvent::OrdersReceived {
            auction_id,
            sell_orders: sells.len(),
            buy_orders: buys.len(),
            timestamp: Utc::now(),
        });

        let result = if sells.is_empty() || buys.is_empty() {
            AuctionResult::NoDeal
        } else {
            let curves = AuctionCurves::build(sells, buys);
            events.push(AuctionEvent::CurvesBuilt {
                auction_id,
                sell_levels: curves.sell.len(),
                buy_levels: curves.buy.len(),
                timestamp: Utc::now(),
            });

            if curves.is_empty() {
                AuctionResult::NoDeal
            } else {
                self.algorithm.clear(&curves.sell, &curves.buy)
            }
        };

        events.push(match result {
            AuctionResult::Deal { quantity, price } => AuctionEvent::Cleared {
                auction_id,
                quantity,
                price,
                timestamp: Utc::now(),
            },
            AuctionResult::NoDeal => AuctionEvent::NoDeal {
                auction_id,
                timestamp: Utc::now(),
            },
        });

        tracing::debug!(
            "Auction {} cleared by {}: {}",
            auction_id,
            self.algorithm.name(),
            result
        );

        self.event_handler.on_events(events);

        result
    }

    /// Clear one auction over a batch produced by [`DiscreteAuction::read`]
    pub fn clear_batch(&self, batch: &OrderBatch) -> AuctionResult {
        self.clear(&batch.sells, &batch.buys)
    }
}

impl Default for DiscreteAuction {
    fn default() -> Self {
        Self::new(
            AuctionConfig::default(),
            Box::new(CumulativeCurveMatcher::new()),
            Arc::new(NoOpEventHandler),
        )
    }
}
