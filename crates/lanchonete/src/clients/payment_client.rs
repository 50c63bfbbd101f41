//! # Payment Client
//!
//! High-level API for the payment actor: checkout (create a pending
//! payment with its QR payload), webhook processing, and the
//! payment-for-order lookup the order lifecycle depends on.

use crate::model::{
    qr_payload, Order, OrderId, Payment, PaymentCreate, PaymentId, PaymentStatus, PaymentUpdate,
};
use crate::payment_actor::{PaymentError, PaymentQuery};
use chrono::Utc;
use store_actor::{EntityClient, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the payment actor.
#[derive(Clone)]
pub struct PaymentClient {
    inner: StoreClient<Payment>,
}

crate::impl_basic_client!(PaymentClient, Payment, PaymentId, PaymentError, payment);

impl PaymentClient {
    /// Starts checkout for an order: records a `Pending` payment over the
    /// order's final amount and returns it with the QR payload to show at
    /// the terminal.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn checkout(
        &self,
        order: &Order,
        description: Option<String>,
    ) -> Result<Payment, PaymentError> {
        debug!("Sending request");
        let id = self
            .inner
            .create(PaymentCreate {
                order_id: order.id,
                amount: order.amount,
                description,
                qr_code: qr_payload(order.id, order.amount),
            })
            .await
            .map_err(PaymentError::from_store)?;
        self.get_payment(id)
            .await?
            .ok_or_else(|| PaymentError::NotFound(id.to_string()))
    }

    /// Returns the most recent payment recorded for an order, if any.
    pub async fn payment_for_order(
        &self,
        order_id: OrderId,
    ) -> Result<Option<Payment>, PaymentError> {
        let mut matches = self.find(PaymentQuery::ByOrder(order_id)).await?;
        Ok(matches.pop())
    }

    /// Applies a provider webhook notification, addressed by the order
    /// the provider was paid for. The reported outcome overwrites
    /// whatever was recorded before; the payment date is stamped only
    /// for a `Paid` outcome.
    #[instrument(skip(self))]
    pub async fn process_webhook(
        &self,
        order_id: OrderId,
        status: PaymentStatus,
        description: Option<String>,
    ) -> Result<Payment, PaymentError> {
        debug!("Processing webhook for {}", order_id);
        let id = self
            .payment_for_order(order_id)
            .await?
            .ok_or_else(|| PaymentError::NotFound(order_id.to_string()))?
            .id;
        let payment_date = (status == PaymentStatus::Paid).then(Utc::now);
        self.inner
            .update(
                id,
                PaymentUpdate {
                    status,
                    description,
                    payment_date,
                },
            )
            .await
            .map_err(PaymentError::from_store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::{create_mock_client, expect_create};

    #[tokio::test]
    async fn test_checkout_encodes_order_into_qr_payload() {
        let (client, mut receiver) = create_mock_client::<Payment>(10);
        let payment_client = PaymentClient::new(client);

        let order = Order {
            id: OrderId(7),
            customer_id: None,
            coupon_code: None,
            items: vec![],
            amount: 25.5,
            status: crate::model::OrderStatus::Received,
        };

        let checkout_task =
            tokio::spawn(async move { payment_client.checkout(&order, None).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");

        assert_eq!(params.order_id, OrderId(7));
        assert_eq!(params.amount, 25.5);
        assert_eq!(params.qr_code, "lanchonete|order_7|25.50");

        // Unblock the task; the follow-up get is answered with the record.
        responder.send(Ok(PaymentId(1))).unwrap();

        use store_actor::mock::expect_get;
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, PaymentId(1));
        responder
            .send(Ok(Some(Payment {
                id: PaymentId(1),
                order_id: OrderId(7),
                amount: 25.5,
                status: PaymentStatus::Pending,
                description: None,
                qr_code: qr_payload(OrderId(7), 25.5),
                payment_date: None,
            })))
            .unwrap();

        let payment = checkout_task.await.unwrap().unwrap();
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert!(payment.payment_date.is_none());
    }
}
