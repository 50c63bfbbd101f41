use super::actions::{
    PricedLine, ProductAction, ProductActionResult, StockBatch, StockBatchResult, StockLine,
};
use super::error::ProductError;
use crate::model::{Category, Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use std::collections::HashMap;
use store_actor::StoreEntity;

/// Filters understood by the product store.
#[derive(Debug, Clone)]
pub enum ProductQuery {
    All,
    ByCategory(Category),
}

#[async_trait]
impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Query = ProductQuery;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Batch = StockBatch;
    type BatchResult = StockBatchResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.price < 0.0 {
            return Err(ProductError::NegativePrice(params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            quantity_available: params.quantity_available,
        })
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            if price < 0.0 {
                return Err(ProductError::NegativePrice(price));
            }
            self.price = price;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(quantity) = update.quantity_available {
            self.quantity_available = quantity;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(
                self.quantity_available,
            )),
        }
    }

    fn matches(&self, query: &ProductQuery) -> bool {
        match query {
            ProductQuery::All => true,
            ProductQuery::ByCategory(category) => self.category == *category,
        }
    }

    /// Prices and reserves every line of an order in one atomic step.
    ///
    /// Validation runs over the aggregated per-product totals before any
    /// stock is touched, so a failing line (unknown product, not enough
    /// stock) leaves every product unchanged. Quantities are aggregated
    /// so an order listing the same product twice cannot slip past a
    /// per-line check.
    fn apply_batch(
        store: &mut HashMap<ProductId, Self>,
        batch: StockBatch,
        _ctx: &(),
    ) -> Result<StockBatchResult, Self::Error> {
        match batch {
            StockBatch::PriceAndReserve(lines) => {
                let mut required: HashMap<ProductId, u32> = HashMap::new();
                for line in &lines {
                    let total = required.entry(line.product_id).or_insert(0);
                    // A total that overflows u32 can never fit in stock.
                    *total = total.checked_add(line.quantity).ok_or_else(|| {
                        let name = store
                            .get(&line.product_id)
                            .map(|p| p.name.clone())
                            .unwrap_or_else(|| line.product_id.to_string());
                        ProductError::InsufficientStock(name)
                    })?;
                }

                for (product_id, total) in &required {
                    let product = store
                        .get(product_id)
                        .ok_or_else(|| ProductError::NotFound(product_id.to_string()))?;
                    if product.quantity_available < *total {
                        return Err(ProductError::InsufficientStock(product.name.clone()));
                    }
                }

                let priced = lines
                    .iter()
                    .map(|line: &StockLine| {
                        // All products verified present above.
                        let product = &store[&line.product_id];
                        PricedLine {
                            product_id: line.product_id,
                            quantity: line.quantity,
                            name: product.name.clone(),
                            line_price: product.price * f64::from(line.quantity),
                        }
                    })
                    .collect();

                for (product_id, total) in required {
                    if let Some(product) = store.get_mut(&product_id) {
                        product.quantity_available -= total;
                    }
                }

                Ok(StockBatchResult::Priced(priced))
            }
        }
    }
}
