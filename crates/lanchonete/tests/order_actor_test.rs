//! Order actor tests: real order actor with mocked product, coupon and
//! payment dependencies. Exercises the placement workflow in `on_create`
//! and the payment gate in `on_update` in isolation.

use chrono::Days;
use lanchonete::clients::{CouponClient, OrderClient, PaymentClient, ProductClient};
use lanchonete::model::{
    today, Coupon, CouponId, CustomerId, Order, OrderCreate, OrderLine, OrderStatus, Payment,
    PaymentId, PaymentStatus, Product, ProductId,
};
use lanchonete::order_actor::OrderError;
use lanchonete::product_actor::{PricedLine, ProductError, StockBatchResult};
use store_actor::mock::MockClient;
use store_actor::StoreError;

struct Harness {
    product_mock: MockClient<Product>,
    coupon_mock: MockClient<Coupon>,
    payment_mock: MockClient<Payment>,
    order_client: OrderClient,
    actor_handle: tokio::task::JoinHandle<()>,
}

/// Spawns a real order actor wired to three mock stores.
fn spawn_order_actor() -> Harness {
    let product_mock = MockClient::<Product>::new();
    let coupon_mock = MockClient::<Coupon>::new();
    let payment_mock = MockClient::<Payment>::new();

    let product_client = ProductClient::new(product_mock.client());
    let coupon_client = CouponClient::new(coupon_mock.client());
    let payment_client = PaymentClient::new(payment_mock.client());

    let (order_actor, order_store) = lanchonete::order_actor::new();
    let order_client = OrderClient::new(order_store);
    let actor_handle =
        tokio::spawn(order_actor.run((product_client, coupon_client, payment_client)));

    Harness {
        product_mock,
        coupon_mock,
        payment_mock,
        order_client,
        actor_handle,
    }
}

impl Harness {
    async fn finish(self) {
        self.product_mock.verify();
        self.coupon_mock.verify();
        self.payment_mock.verify();
        drop(self.order_client);
        self.actor_handle.await.unwrap();
    }
}

fn coupon(pct: f64, max: f64) -> Coupon {
    Coupon {
        id: CouponId(1),
        code: "WELCOME10".to_string(),
        description: None,
        discount_percentage: pct,
        max_discount: max,
        expires_at: today(),
        active: true,
        vip: false,
        customers: vec![],
    }
}

fn two_lines() -> Vec<OrderLine> {
    vec![
        OrderLine {
            product_id: ProductId(1),
            quantity: 2,
        },
        OrderLine {
            product_id: ProductId(2),
            quantity: 1,
        },
    ]
}

fn two_priced_lines() -> Vec<PricedLine> {
    vec![
        PricedLine {
            product_id: ProductId(1),
            quantity: 2,
            name: "X-Burger".to_string(),
            line_price: 31.8,
        },
        PricedLine {
            product_id: ProductId(2),
            quantity: 1,
            name: "Fries".to_string(),
            line_price: 9.5,
        },
    ]
}

#[tokio::test]
async fn test_order_priced_with_percentage_discount() {
    let mut harness = spawn_order_actor();

    // on_create resolves the coupon, then prices and reserves the lines.
    harness
        .coupon_mock
        .expect_find()
        .return_ok(vec![coupon(10.0, 50.0)]);
    harness
        .product_mock
        .expect_batch()
        .return_ok(StockBatchResult::Priced(two_priced_lines()));

    let order = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: Some(CustomerId(1)),
            coupon_code: Some("WELCOME10".to_string()),
            lines: two_lines(),
        })
        .await
        .unwrap();

    // subtotal 41.30, 10% discount = 4.13
    assert_eq!(order.status, OrderStatus::Received);
    assert_eq!(order.items[0].name, "X-Burger");
    assert!((order.subtotal() - 41.3).abs() < 1e-9);
    assert!((order.amount - 37.17).abs() < 1e-9);

    harness.finish().await;
}

#[tokio::test]
async fn test_discount_capped_at_coupon_maximum() {
    let mut harness = spawn_order_actor();

    // 50% of 41.30 would be 20.65; the cap limits it to 5.00.
    harness
        .coupon_mock
        .expect_find()
        .return_ok(vec![coupon(50.0, 5.0)]);
    harness
        .product_mock
        .expect_batch()
        .return_ok(StockBatchResult::Priced(two_priced_lines()));

    let order = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: Some(CustomerId(1)),
            coupon_code: Some("WELCOME10".to_string()),
            lines: two_lines(),
        })
        .await
        .unwrap();

    assert!((order.amount - 36.3).abs() < 1e-9);

    harness.finish().await;
}

#[tokio::test]
async fn test_amount_never_goes_negative() {
    let mut harness = spawn_order_actor();

    harness
        .coupon_mock
        .expect_find()
        .return_ok(vec![coupon(100.0, 1000.0)]);
    harness
        .product_mock
        .expect_batch()
        .return_ok(StockBatchResult::Priced(two_priced_lines()));

    let order = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: Some(CustomerId(1)),
            coupon_code: Some("WELCOME10".to_string()),
            lines: two_lines(),
        })
        .await
        .unwrap();

    assert_eq!(order.amount, 0.0);

    harness.finish().await;
}

#[tokio::test]
async fn test_coupon_requires_identified_customer() {
    let harness = spawn_order_actor();

    // Fails before any dependency is consulted.
    let result = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: None,
            coupon_code: Some("WELCOME10".to_string()),
            lines: two_lines(),
        })
        .await;

    assert_eq!(result, Err(OrderError::CouponRequiresCustomer));

    harness.finish().await;
}

#[tokio::test]
async fn test_expired_coupon_rejected() {
    let mut harness = spawn_order_actor();

    let mut expired = coupon(10.0, 5.0);
    expired.expires_at = today().checked_sub_days(Days::new(1)).unwrap();
    harness.coupon_mock.expect_find().return_ok(vec![expired]);

    let result = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: Some(CustomerId(1)),
            coupon_code: Some("WELCOME10".to_string()),
            lines: two_lines(),
        })
        .await;

    assert_eq!(
        result,
        Err(OrderError::CouponExpired("WELCOME10".to_string()))
    );

    harness.finish().await;
}

#[tokio::test]
async fn test_inactive_coupon_rejected() {
    let mut harness = spawn_order_actor();

    let mut inactive = coupon(10.0, 5.0);
    inactive.active = false;
    harness.coupon_mock.expect_find().return_ok(vec![inactive]);

    let result = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: Some(CustomerId(1)),
            coupon_code: Some("WELCOME10".to_string()),
            lines: two_lines(),
        })
        .await;

    assert_eq!(
        result,
        Err(OrderError::CouponInactive("WELCOME10".to_string()))
    );

    harness.finish().await;
}

#[tokio::test]
async fn test_unknown_coupon_rejected() {
    let mut harness = spawn_order_actor();

    harness.coupon_mock.expect_find().return_ok(vec![]);

    let result = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: Some(CustomerId(1)),
            coupon_code: Some("NOPE".to_string()),
            lines: two_lines(),
        })
        .await;

    assert_eq!(result, Err(OrderError::CouponNotFound("NOPE".to_string())));

    harness.finish().await;
}

#[tokio::test]
async fn test_zero_quantity_line_rejected() {
    let harness = spawn_order_actor();

    let result = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: None,
            coupon_code: None,
            lines: vec![OrderLine {
                product_id: ProductId(1),
                quantity: 0,
            }],
        })
        .await;

    assert_eq!(result, Err(OrderError::ZeroQuantity));

    harness.finish().await;
}

#[tokio::test]
async fn test_insufficient_stock_discards_order() {
    let mut harness = spawn_order_actor();

    harness
        .product_mock
        .expect_batch()
        .return_err(StoreError::EntityError(Box::new(
            ProductError::InsufficientStock("X-Burger".to_string()),
        )));

    let result = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: None,
            coupon_code: None,
            lines: two_lines(),
        })
        .await;

    assert_eq!(
        result,
        Err(OrderError::InsufficientStock("X-Burger".to_string()))
    );

    // A failed creation leaves nothing behind.
    let orders = harness.order_client.list_orders().await.unwrap();
    assert!(orders.is_empty());

    harness.finish().await;
}

#[tokio::test]
async fn test_status_transition_requires_paid_payment() {
    let mut harness = spawn_order_actor();

    harness
        .product_mock
        .expect_batch()
        .return_ok(StockBatchResult::Priced(two_priced_lines()));

    let order = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: None,
            coupon_code: None,
            lines: two_lines(),
        })
        .await
        .unwrap();

    // No payment recorded yet: the transition must be refused.
    harness.payment_mock.expect_find().return_ok(vec![]);
    let refused = harness
        .order_client
        .set_status(order.id, OrderStatus::InProgress)
        .await;
    assert!(matches!(refused, Err(OrderError::PaymentNotApproved(_))));

    // A Pending payment is not enough either.
    let mut payment = Payment {
        id: PaymentId(1),
        order_id: order.id,
        amount: order.amount,
        status: PaymentStatus::Pending,
        description: None,
        qr_code: String::new(),
        payment_date: None,
    };
    harness
        .payment_mock
        .expect_find()
        .return_ok(vec![payment.clone()]);
    let still_refused = harness
        .order_client
        .set_status(order.id, OrderStatus::InProgress)
        .await;
    assert!(matches!(
        still_refused,
        Err(OrderError::PaymentNotApproved(_))
    ));

    // Once the webhook marks it Paid, the kitchen may start.
    payment.status = PaymentStatus::Paid;
    harness.payment_mock.expect_find().return_ok(vec![payment]);
    let moved = harness
        .order_client
        .set_status(order.id, OrderStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(moved.status, OrderStatus::InProgress);

    harness.finish().await;
}

#[tokio::test]
async fn test_status_transition_on_unknown_order() {
    let harness = spawn_order_actor();

    // The store rejects the update before the payment gate runs, so no
    // payment lookup happens.
    let result = harness
        .order_client
        .set_status(lanchonete::model::OrderId(99), OrderStatus::InProgress)
        .await;

    assert_eq!(result, Err(OrderError::NotFound("order_99".to_string())));

    harness.finish().await;
}

#[tokio::test]
async fn test_order_queries_filter_by_customer_and_status() {
    let mut harness = spawn_order_actor();

    harness
        .product_mock
        .expect_batch()
        .return_ok(StockBatchResult::Priced(two_priced_lines()));
    harness
        .product_mock
        .expect_batch()
        .return_ok(StockBatchResult::Priced(two_priced_lines()));

    let mine = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: Some(CustomerId(7)),
            coupon_code: None,
            lines: two_lines(),
        })
        .await
        .unwrap();
    let _guest = harness
        .order_client
        .place_order(OrderCreate {
            customer_id: None,
            coupon_code: None,
            lines: two_lines(),
        })
        .await
        .unwrap();

    let orders: Vec<Order> = harness
        .order_client
        .orders_for_customer(CustomerId(7))
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, mine.id);

    let received = harness
        .order_client
        .orders_by_status(OrderStatus::Received)
        .await
        .unwrap();
    assert_eq!(received.len(), 2);

    harness.finish().await;
}
