use super::error::OrderError;
use crate::clients::{CouponClient, PaymentClient, ProductClient};
use crate::model::{
    today, Coupon, CustomerId, Order, OrderCreate, OrderId, OrderItem, OrderStatus, OrderUpdate,
    PaymentStatus,
};
use async_trait::async_trait;
use std::collections::HashMap;
use store_actor::StoreEntity;
use tracing::{debug, info};

/// Dependencies injected into the order actor at `run()` time.
pub type OrderContext = (ProductClient, CouponClient, PaymentClient);

/// Filters understood by the order store.
///
/// `Active` is the kitchen's view: everything not yet `Completed`.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    All,
    ByStatus(OrderStatus),
    ByCustomer(CustomerId),
    Active,
}

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Query = OrderQuery;
    type Action = OrderAction;
    type ActionResult = ();
    type Batch = OrderBatch;
    type BatchResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        // Lines are carried over unpriced; pricing happens in on_create
        // once the dependencies are available.
        let items = params
            .lines
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id,
                quantity: line.quantity,
                name: String::new(),
                price: 0.0,
            })
            .collect();
        Ok(Self {
            id,
            customer_id: params.customer_id,
            coupon_code: params.coupon_code,
            items,
            amount: 0.0,
            status: OrderStatus::Received,
        })
    }

    /// Runs the order placement workflow: coupon gate, quantity check,
    /// atomic price-and-reserve against the stock ledger, then discount
    /// application. A failure at any step discards the order; the stock
    /// ledger only changes if the whole workflow succeeds.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        let (products, coupons, _payments) = ctx;

        // An anonymous order cannot carry a coupon.
        if self.coupon_code.is_some() && self.customer_id.is_none() {
            return Err(OrderError::CouponRequiresCustomer);
        }

        let coupon = match &self.coupon_code {
            Some(code) => Some(self.validate_coupon(coupons, code).await?),
            None => None,
        };

        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::ZeroQuantity);
        }

        let lines = self
            .items
            .iter()
            .map(|item| crate::product_actor::StockLine {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();
        let priced = products
            .price_and_reserve(lines)
            .await
            .map_err(OrderError::from_product)?;

        self.items = priced
            .into_iter()
            .map(|line| OrderItem {
                product_id: line.product_id,
                quantity: line.quantity,
                name: line.name,
                price: line.line_price,
            })
            .collect();

        let subtotal = self.subtotal();
        let discount = coupon
            .as_ref()
            .map(|c| c.discount_for(subtotal))
            .unwrap_or(0.0);
        // A discount larger than the subtotal caps at a free order.
        self.amount = (subtotal - discount).max(0.0);

        info!(
            order_id = %self.id,
            subtotal,
            discount,
            amount = self.amount,
            "Order placed"
        );
        Ok(())
    }

    /// Gates status transitions on the payment: an order only leaves
    /// `Received` once its payment is `Paid`.
    async fn on_update(&mut self, update: OrderUpdate, ctx: &OrderContext) -> Result<(), Self::Error> {
        let (_products, _coupons, payments) = ctx;
        match update {
            OrderUpdate::SetStatus(status) => {
                if status != OrderStatus::Received {
                    let payment = payments
                        .payment_for_order(self.id)
                        .await
                        .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
                    let paid =
                        payment.is_some_and(|p| p.status == PaymentStatus::Paid);
                    if !paid {
                        return Err(OrderError::PaymentNotApproved(self.id.to_string()));
                    }
                }
                debug!(order_id = %self.id, ?status, "Status transition");
                self.status = status;
                Ok(())
            }
        }
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &OrderContext) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::All => true,
            OrderQuery::ByStatus(status) => self.status == *status,
            OrderQuery::ByCustomer(customer_id) => self.customer_id == Some(*customer_id),
            OrderQuery::Active => self.status != OrderStatus::Completed,
        }
    }

    fn apply_batch(
        _store: &mut HashMap<OrderId, Self>,
        batch: OrderBatch,
        _ctx: &OrderContext,
    ) -> Result<(), Self::Error> {
        match batch {}
    }
}

impl Order {
    /// Resolves and validates the coupon named on the order.
    async fn validate_coupon(
        &self,
        coupons: &CouponClient,
        code: &str,
    ) -> Result<Coupon, OrderError> {
        let coupon = coupons
            .find_by_code(code)
            .await
            .map_err(OrderError::from_coupon)?
            .ok_or_else(|| OrderError::CouponNotFound(code.to_string()))?;
        if !coupon.active {
            return Err(OrderError::CouponInactive(code.to_string()));
        }
        if coupon.expires_at < today() {
            return Err(OrderError::CouponExpired(code.to_string()));
        }
        Ok(coupon)
    }
}

/// The order store has no custom actions.
#[derive(Debug, Clone)]
pub enum OrderAction {}

/// The order store has no batch operations.
#[derive(Debug)]
pub enum OrderBatch {}
