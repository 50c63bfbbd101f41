//! # Coupon Client
//!
//! High-level API for the coupon actor. Code uniqueness needs a lookup
//! across the whole store, so it is enforced here before create and
//! rename rather than inside the entity hooks.

use crate::coupon_actor::{CouponAction, CouponError, CouponQuery};
use crate::model::{today, Coupon, CouponCreate, CouponId, CouponUpdate, CustomerId};
use store_actor::{EntityClient, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the coupon actor.
#[derive(Clone)]
pub struct CouponClient {
    inner: StoreClient<Coupon>,
}

crate::impl_basic_client!(CouponClient, Coupon, CouponId, CouponError, coupon);

impl CouponClient {
    /// Creates a coupon after checking that its code is not taken.
    #[instrument(skip(self, params), fields(code = %params.code))]
    pub async fn create_coupon(&self, params: CouponCreate) -> Result<CouponId, CouponError> {
        debug!("Sending request");
        if self.find_by_code(&params.code).await?.is_some() {
            return Err(CouponError::DuplicateCode(params.code));
        }
        self.inner
            .create(params)
            .await
            .map_err(CouponError::from_store)
    }

    /// Updates a coupon; a code change is checked for uniqueness against
    /// every other coupon first.
    #[instrument(skip(self, update))]
    pub async fn update_coupon(
        &self,
        id: CouponId,
        update: CouponUpdate,
    ) -> Result<Coupon, CouponError> {
        debug!("Sending request");
        if let Some(code) = &update.code {
            if let Some(existing) = self.find_by_code(code).await? {
                if existing.id != id {
                    return Err(CouponError::DuplicateCode(code.clone()));
                }
            }
        }
        self.inner
            .update(id, update)
            .await
            .map_err(CouponError::from_store)
    }

    /// Looks up a coupon by its code, valid or not.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponError> {
        let mut matches = self.find(CouponQuery::ByCode(code.to_string())).await?;
        Ok(matches.pop())
    }

    /// Administrative listing of every coupon, sorted by ascending id,
    /// with no validity or VIP filtering.
    pub async fn list_coupons(&self) -> Result<Vec<Coupon>, CouponError> {
        self.find(CouponQuery::All).await
    }

    /// Lists the coupons a customer can redeem today: active, unexpired,
    /// and VIP coupons only for their associated customers.
    pub async fn redeemable_coupons(
        &self,
        customer: Option<CustomerId>,
    ) -> Result<Vec<Coupon>, CouponError> {
        self.find(CouponQuery::RedeemableOn {
            date: today(),
            customer,
        })
        .await
    }

    /// Associates a customer with a VIP coupon.
    #[instrument(skip(self))]
    pub async fn grant_to(
        &self,
        id: CouponId,
        customer_id: CustomerId,
    ) -> Result<(), CouponError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CouponAction::GrantTo(customer_id))
            .await
            .map_err(CouponError::from_store)
    }
}
