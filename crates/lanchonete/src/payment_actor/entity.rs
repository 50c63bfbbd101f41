use super::error::PaymentError;
use crate::model::{OrderId, Payment, PaymentCreate, PaymentId, PaymentStatus, PaymentUpdate};
use async_trait::async_trait;
use std::collections::HashMap;
use store_actor::StoreEntity;

/// Filters understood by the payment store.
#[derive(Debug, Clone)]
pub enum PaymentQuery {
    All,
    ByOrder(OrderId),
}

#[async_trait]
impl StoreEntity for Payment {
    type Id = PaymentId;
    type Create = PaymentCreate;
    type Update = PaymentUpdate;
    type Query = PaymentQuery;
    type Action = PaymentAction;
    type ActionResult = ();
    type Batch = PaymentBatch;
    type BatchResult = ();
    type Context = ();
    type Error = PaymentError;

    fn from_create_params(id: PaymentId, params: PaymentCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            order_id: params.order_id,
            amount: params.amount,
            status: PaymentStatus::Pending,
            description: params.description,
            qr_code: params.qr_code,
            payment_date: None,
        })
    }

    // Webhook confirmations are authoritative and overwrite whatever
    // state was recorded before, including a prior Paid.
    async fn on_update(&mut self, update: PaymentUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.status = update.status;
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        self.payment_date = update.payment_date;
        Ok(())
    }

    async fn handle_action(&mut self, action: PaymentAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &PaymentQuery) -> bool {
        match query {
            PaymentQuery::All => true,
            PaymentQuery::ByOrder(order_id) => self.order_id == *order_id,
        }
    }

    fn apply_batch(
        _store: &mut HashMap<PaymentId, Self>,
        batch: PaymentBatch,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match batch {}
    }
}

/// The payment store has no custom actions.
#[derive(Debug, Clone)]
pub enum PaymentAction {}

/// The payment store has no batch operations.
#[derive(Debug)]
pub enum PaymentBatch {}
