use crate::clients::{CouponClient, CustomerClient, OrderClient, PaymentClient, ProductClient};
use crate::{coupon_actor, customer_actor, order_actor, payment_actor, product_actor};
use tracing::{error, info};

/// Runtime orchestrator for the ordering system.
///
/// Owns one client per store and the task handles of the running
/// actors. The order actor is the only one with dependencies; it gets
/// clones of the product, coupon and payment clients injected as its
/// context.
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub coupon_client: CouponClient,
    pub order_client: OrderClient,
    pub payment_client: PaymentClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Creates the system with all five actors running.
    pub fn new() -> Self {
        let (customer_actor, customer_store) = customer_actor::new();
        let (product_actor, product_store) = product_actor::new();
        let (coupon_actor, coupon_store) = coupon_actor::new();
        let (payment_actor, payment_store) = payment_actor::new();
        let (order_actor, order_store) = order_actor::new();

        let customer_client = CustomerClient::new(customer_store);
        let product_client = ProductClient::new(product_store);
        let coupon_client = CouponClient::new(coupon_store);
        let payment_client = PaymentClient::new(payment_store);
        let order_client = OrderClient::new(order_store);

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let coupon_handle = tokio::spawn(coupon_actor.run(()));
        let payment_handle = tokio::spawn(payment_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((
            product_client.clone(),
            coupon_client.clone(),
            payment_client.clone(),
        )));

        Self {
            customer_client,
            product_client,
            coupon_client,
            order_client,
            payment_client,
            handles: vec![
                customer_handle,
                product_handle,
                coupon_handle,
                payment_handle,
                order_handle,
            ],
        }
    }

    /// Gracefully shuts down the whole system: drops every client so the
    /// actors' channels close, then awaits their tasks.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.payment_client);
        drop(self.coupon_client);
        drop(self.product_client);
        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
