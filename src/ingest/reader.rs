// ============================================================================
// Order Reader
// ============================================================================

use super::parser::parse_order;
use crate::domain::{AuctionConfig, Order, Side};
use std::io::{self, BufRead};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orders of one auction, split by side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBatch {
    pub sells: Vec<Order>,
    pub buys: Vec<Order>,
}

impl OrderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order to the list of its side
    pub fn push(&mut self, order: Order) {
        match order.side {
            Side::Sell => self.sells.push(order),
            Side::Buy => self.buys.push(order),
        }
    }

    pub fn len(&self) -> usize {
        self.sells.len() + self.buys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sells.is_empty() && self.buys.is_empty()
    }
}

impl FromIterator<Order> for OrderBatch {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        let mut batch = Self::new();
        batch.extend(iter);
        batch
    }
}

impl Extend<Order> for OrderBatch {
    fn extend<I: IntoIterator<Item = Order>>(&mut self, iter: I) {
        for order in iter {
            self.push(order);
        }
    }
}

/// Read orders line by line.
///
/// At most `config.max_orders` lines are considered; anything after that
/// is ignored. Lines that are not valid orders are skipped, including
/// lines that are not valid UTF-8 (bad bytes are replaced before parsing).
///
/// # Errors
/// Only I/O failures of the underlying reader are returned.
pub fn read_orders<R: BufRead>(reader: R, config: &AuctionConfig) -> io::Result<OrderBatch> {
    let mut batch = OrderBatch::new();
    let mut skipped = 0usize;

    for (index, line) in reader.split(b'\n').take(config.max_orders).enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let line = String::from_utf8_lossy(&line);
        match parse_order(&line, config) {
            Ok(order) => batch.push(order),
            Err(err) => {
                skipped += 1;
                tracing::trace!("Skipping line {}: {}", index + 1, err);
            },
        }
    }

    tracing::debug!(
        "Read {} sell and {} buy orders, {} lines skipped",
        batch.sells.len(),
        batch.buys.len(),
        skipped
    );

    Ok(batch)
}
