//! End-to-end walkthrough of the ordering system: register a customer,
//! stock the catalog, publish a coupon, place a discounted order, pay it
//! via the webhook and advance it through the kitchen.

use chrono::Days;
use lanchonete::lifecycle::OrderSystem;
use lanchonete::model::{
    today, Category, CouponCreate, CustomerCreate, OrderCreate, OrderLine, OrderStatus,
    PaymentStatus, ProductCreate,
};
use store_actor::tracing::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting ordering system");
    let system = OrderSystem::new();

    let span = tracing::info_span!("customer_registration");
    let customer_id = async {
        info!("Registering customer");
        system
            .customer_client
            .register_customer(CustomerCreate {
                name: "Ana Souza".to_string(),
                email: "ana@example.com".to_string(),
                cpf: "529.982.247-25".to_string(),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(customer_id = %customer_id, "Customer registered");

    let span = tracing::info_span!("catalog_setup");
    let (burger_id, fries_id) = async {
        info!("Stocking catalog");
        let burger_id = system
            .product_client
            .create_product(ProductCreate {
                name: "X-Burger".to_string(),
                description: "House burger".to_string(),
                price: 15.9,
                category: Category::Lunch,
                quantity_available: 10,
            })
            .await
            .map_err(|e| e.to_string())?;
        let fries_id = system
            .product_client
            .create_product(ProductCreate {
                name: "Fries".to_string(),
                description: "Crispy fries".to_string(),
                price: 9.5,
                category: Category::Sides,
                quantity_available: 20,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((burger_id, fries_id))
    }
    .instrument(span)
    .await?;
    info!(%burger_id, %fries_id, "Catalog ready");

    let expires_at = today()
        .checked_add_days(Days::new(30))
        .ok_or_else(|| "expiry date out of range".to_string())?;
    system
        .coupon_client
        .create_coupon(CouponCreate {
            code: "WELCOME10".to_string(),
            description: Some("10% off, up to R$5".to_string()),
            discount_percentage: 10.0,
            max_discount: 5.0,
            expires_at,
            active: true,
            vip: false,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!("Coupon WELCOME10 published");

    let span = tracing::info_span!("order_placement");
    let order = async {
        info!("Placing order");
        system
            .order_client
            .place_order(OrderCreate {
                customer_id: Some(customer_id),
                coupon_code: Some("WELCOME10".to_string()),
                lines: vec![
                    OrderLine {
                        product_id: burger_id,
                        quantity: 2,
                    },
                    OrderLine {
                        product_id: fries_id,
                        quantity: 1,
                    },
                ],
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(order_id = %order.id, amount = order.amount, "Order placed");

    let span = tracing::info_span!("payment");
    let order_id = order.id;
    let payment = async {
        let payment = system
            .payment_client
            .checkout(&order, Some("Kiosk order".to_string()))
            .await
            .map_err(|e| e.to_string())?;
        info!(payment_id = %payment.id, qr = %payment.qr_code, "Awaiting payment");

        // The provider confirms via webhook, addressed by order.
        system
            .payment_client
            .process_webhook(order_id, PaymentStatus::Paid, None)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(payment_id = %payment.id, "Payment approved");

    system
        .order_client
        .set_status(order_id, OrderStatus::InProgress)
        .await
        .map_err(|e| e.to_string())?;
    system
        .order_client
        .set_status(order_id, OrderStatus::Ready)
        .await
        .map_err(|e| e.to_string())?;

    let queue = system
        .order_client
        .kitchen_queue()
        .await
        .map_err(|e| e.to_string())?;
    for entry in &queue {
        info!(order_id = %entry.id, status = ?entry.status, "Kitchen queue entry");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
