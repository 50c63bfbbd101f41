//! # Product Client
//!
//! High-level API for the product actor: catalog CRUD, category
//! listings, stock checks and the price-and-reserve batch used during
//! order creation.

use crate::model::{Category, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{
    PricedLine, ProductAction, ProductActionResult, ProductError, ProductQuery, StockBatch,
    StockBatchResult, StockLine,
};
use store_actor::{EntityClient, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

crate::impl_basic_client!(ProductClient, Product, ProductId, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(ProductError::from_store)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(ProductError::from_store)
    }

    /// Lists the whole catalog, sorted by ascending id.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.find(ProductQuery::All).await
    }

    /// Lists the catalog entries of one category, sorted by ascending id.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Product>, ProductError> {
        self.find(ProductQuery::ByCategory(category)).await
    }

    /// Reads the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
        {
            Ok(ProductActionResult::StockLevel(level)) => Ok(level),
            Err(e) => Err(ProductError::from_store(e)),
        }
    }

    /// Prices and reserves all lines of an order in one atomic step.
    ///
    /// Either every line comes back priced with its stock decremented, or
    /// the stock ledger is untouched and the first failing line's error is
    /// returned.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn price_and_reserve(
        &self,
        lines: Vec<StockLine>,
    ) -> Result<Vec<PricedLine>, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .execute_batch(StockBatch::PriceAndReserve(lines))
            .await
        {
            Ok(StockBatchResult::Priced(priced)) => Ok(priced),
            Err(e) => Err(ProductError::from_store(e)),
        }
    }
}
