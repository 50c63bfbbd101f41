//! Stock ledger operations beyond plain CRUD.
//!
//! `CheckStock` is a read-only single-product action. `PriceAndReserve`
//! is the store-wide batch at the heart of order creation: it prices and
//! reserves every line of an order in one atomic step.

use crate::model::ProductId;

/// Single-product actions.
#[derive(Debug, Clone)]
pub enum ProductAction {
    CheckStock,
}

#[derive(Debug, Clone)]
pub enum ProductActionResult {
    StockLevel(u32),
}

/// One requested line of a reservation: which product, how many units.
#[derive(Debug, Clone, Copy)]
pub struct StockLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A line that was priced and reserved: carries the snapshots an order
/// item needs (name, line price at current unit price).
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub name: String,
    pub line_price: f64,
}

/// Store-wide stock batch. Processed atomically by the product actor:
/// either every line is priced and its stock decremented, or nothing
/// changes.
#[derive(Debug)]
pub enum StockBatch {
    PriceAndReserve(Vec<StockLine>),
}

#[derive(Debug)]
pub enum StockBatchResult {
    Priced(Vec<PricedLine>),
}
