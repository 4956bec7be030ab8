// ============================================================================
// Ingestion Module
// Best-effort parsing of order lines into validated orders
// ============================================================================
//
// Lines that do not describe a valid order are skipped, never reported as
// failures. Only I/O errors propagate.

mod parser;
mod reader;

pub use parser::{parse_order, ParseError};
pub use reader::{read_orders, OrderBatch};
