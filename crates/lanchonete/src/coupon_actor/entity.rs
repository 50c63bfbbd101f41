use super::error::CouponError;
use crate::model::{today, Coupon, CouponCreate, CouponId, CouponUpdate, CustomerId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use store_actor::StoreEntity;

/// Filters understood by the coupon store.
///
/// `RedeemableOn` is the customer-facing listing: active, unexpired, and
/// (for VIP coupons) restricted to explicitly associated customers.
/// `All` is the administrative listing that bypasses those filters.
#[derive(Debug, Clone)]
pub enum CouponQuery {
    All,
    ByCode(String),
    RedeemableOn {
        date: NaiveDate,
        customer: Option<CustomerId>,
    },
}

/// Coupon actions beyond CRUD.
#[derive(Debug, Clone)]
pub enum CouponAction {
    /// Associate a customer with a VIP coupon.
    GrantTo(CustomerId),
}

/// Code must be non-empty, contain no whitespace and fit in 20 chars.
pub fn validate_code(code: &str) -> Result<(), CouponError> {
    if code.is_empty() {
        return Err(CouponError::InvalidCode("code must not be empty".into()));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(CouponError::InvalidCode(
            "code must not contain whitespace".into(),
        ));
    }
    if code.chars().count() > 20 {
        return Err(CouponError::InvalidCode(
            "code must be at most 20 characters".into(),
        ));
    }
    Ok(())
}

pub fn validate_discount(discount_percentage: f64, max_discount: f64) -> Result<(), CouponError> {
    if !(discount_percentage > 0.0 && discount_percentage <= 100.0) {
        return Err(CouponError::InvalidDiscountPercentage(discount_percentage));
    }
    if max_discount < 0.0 {
        return Err(CouponError::NegativeMaxDiscount(max_discount));
    }
    Ok(())
}

/// New or updated expiry dates must not already be in the past.
pub fn validate_expiry(expires_at: NaiveDate, reference: NaiveDate) -> Result<(), CouponError> {
    if expires_at < reference {
        return Err(CouponError::ExpiryInPast(expires_at));
    }
    Ok(())
}

#[async_trait]
impl StoreEntity for Coupon {
    type Id = CouponId;
    type Create = CouponCreate;
    type Update = CouponUpdate;
    type Query = CouponQuery;
    type Action = CouponAction;
    type ActionResult = ();
    type Batch = CouponBatch;
    type BatchResult = ();
    type Context = ();
    type Error = CouponError;

    fn from_create_params(id: CouponId, params: CouponCreate) -> Result<Self, Self::Error> {
        validate_code(&params.code)?;
        validate_discount(params.discount_percentage, params.max_discount)?;
        validate_expiry(params.expires_at, today())?;
        Ok(Self {
            id,
            code: params.code,
            description: params.description,
            discount_percentage: params.discount_percentage,
            max_discount: params.max_discount,
            expires_at: params.expires_at,
            active: params.active,
            vip: params.vip,
            customers: vec![],
        })
    }

    async fn on_update(&mut self, update: CouponUpdate, _ctx: &()) -> Result<(), Self::Error> {
        // Validate against the effective values before applying anything.
        let pct = update
            .discount_percentage
            .unwrap_or(self.discount_percentage);
        let max = update.max_discount.unwrap_or(self.max_discount);
        validate_discount(pct, max)?;
        if let Some(code) = &update.code {
            validate_code(code)?;
        }
        if let Some(expires_at) = update.expires_at {
            validate_expiry(expires_at, today())?;
        }

        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        self.discount_percentage = pct;
        self.max_discount = max;
        if let Some(expires_at) = update.expires_at {
            self.expires_at = expires_at;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        if let Some(vip) = update.vip {
            self.vip = vip;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CouponAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {
            CouponAction::GrantTo(customer_id) => {
                if !self.customers.contains(&customer_id) {
                    self.customers.push(customer_id);
                }
                Ok(())
            }
        }
    }

    fn matches(&self, query: &CouponQuery) -> bool {
        match query {
            CouponQuery::All => true,
            CouponQuery::ByCode(code) => self.code == *code,
            CouponQuery::RedeemableOn { date, customer } => self.redeemable_by(*date, *customer),
        }
    }

    fn apply_batch(
        _store: &mut HashMap<CouponId, Self>,
        batch: CouponBatch,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match batch {}
    }
}

/// The coupon store has no batch operations.
#[derive(Debug)]
pub enum CouponBatch {}
