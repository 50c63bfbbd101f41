//! # Order Client
//!
//! High-level API for the order actor. Placement and payment-gated
//! status transitions happen inside the actor's hooks; this wrapper
//! adds the kitchen queue ordering, which is a view concern.

use crate::model::{CustomerId, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderError, OrderQuery};
use store_actor::{EntityClient, StoreClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

crate::impl_basic_client!(OrderClient, Order, OrderId, OrderError, order);

impl OrderClient {
    /// Places an order and returns it priced, with stock reserved.
    #[instrument(skip(self, params), fields(line_count = params.lines.len()))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let id = self
            .inner
            .create(params)
            .await
            .map_err(OrderError::from_store)?;
        info!(order_id = %id, "Order created");
        self.get_order(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Moves an order to a new status. Fails unless the order's payment
    /// has been approved.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate::SetStatus(status))
            .await
            .map_err(OrderError::from_store)
    }

    /// Lists every order, sorted by ascending id.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.find(OrderQuery::All).await
    }

    /// Lists the orders currently in one workflow stage, sorted by
    /// ascending id.
    pub async fn orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        self.find(OrderQuery::ByStatus(status)).await
    }

    /// Lists a customer's orders, sorted by ascending id.
    pub async fn orders_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, OrderError> {
        self.find(OrderQuery::ByCustomer(customer_id)).await
    }

    /// The kitchen display: active orders, most-ready first, oldest
    /// first within the same stage.
    #[instrument(skip(self))]
    pub async fn kitchen_queue(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.find(OrderQuery::Active).await?;
        orders.sort_by_key(|order| (order.status.kitchen_priority(), order.id));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::MockClient;

    fn order(id: u32, status: OrderStatus) -> Order {
        Order {
            id: OrderId(id),
            customer_id: None,
            coupon_code: None,
            items: vec![],
            amount: 10.0,
            status,
        }
    }

    #[tokio::test]
    async fn test_kitchen_queue_sorts_ready_first_then_by_id() {
        let mut mock = MockClient::<Order>::new();
        // Find returns id order; the queue must re-sort by stage.
        mock.expect_find().return_ok(vec![
            order(1, OrderStatus::Received),
            order(2, OrderStatus::Ready),
            order(3, OrderStatus::InProgress),
            order(4, OrderStatus::Ready),
        ]);

        let client = OrderClient::new(mock.client());
        let queue = client.kitchen_queue().await.unwrap();

        let ids: Vec<u32> = queue.iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
        mock.verify();
    }
}
