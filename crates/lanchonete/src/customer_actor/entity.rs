use super::error::CustomerError;
use crate::cpf;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use std::collections::HashMap;
use store_actor::StoreEntity;

/// Filters understood by the customer store. `ByCpf` expects a
/// normalized (digits-only) CPF.
#[derive(Debug, Clone)]
pub enum CustomerQuery {
    All,
    ByCpf(String),
}

#[async_trait]
impl StoreEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Query = CustomerQuery;
    type Action = CustomerAction;
    type ActionResult = ();
    type Batch = CustomerBatch;
    type BatchResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        let digits = cpf::normalize(&params.cpf);
        if !cpf::is_cpf_valid(&digits) {
            return Err(CustomerError::InvalidCpf(params.cpf));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            cpf: digits,
            active: true,
        })
    }

    // CPF identifies the customer and is immutable after registration.
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &CustomerQuery) -> bool {
        match query {
            CustomerQuery::All => true,
            CustomerQuery::ByCpf(digits) => self.cpf == *digits,
        }
    }

    fn apply_batch(
        _store: &mut HashMap<CustomerId, Self>,
        batch: CustomerBatch,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match batch {}
    }
}

/// The customer store has no custom actions.
#[derive(Debug, Clone)]
pub enum CustomerAction {}

/// The customer store has no batch operations.
#[derive(Debug)]
pub enum CustomerBatch {}
