//! # Customer Client
//!
//! High-level API for the customer actor: registration with CPF
//! uniqueness, identification by CPF at the kiosk, and profile updates.

use crate::cpf;
use crate::customer_actor::{CustomerError, CustomerQuery};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use store_actor::{EntityClient, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: StoreClient<Customer>,
}

crate::impl_basic_client!(CustomerClient, Customer, CustomerId, CustomerError, customer);

impl CustomerClient {
    /// Registers a customer after checking that the CPF is not already
    /// registered. CPF format validation happens in the store itself.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn register_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        let digits = cpf::normalize(&params.cpf);
        if self.identify_by_cpf(&digits).await?.is_some() {
            return Err(CustomerError::DuplicateCpf(digits));
        }
        self.inner
            .create(params)
            .await
            .map_err(CustomerError::from_store)
    }

    /// Looks up a customer by CPF; accepts formatted or bare input.
    pub async fn identify_by_cpf(&self, cpf: &str) -> Result<Option<Customer>, CustomerError> {
        let mut matches = self
            .find(CustomerQuery::ByCpf(cpf::normalize(cpf)))
            .await?;
        Ok(matches.pop())
    }

    #[instrument(skip(self, update))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(CustomerError::from_store)
    }

    /// Lists all registered customers, sorted by ascending id.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        self.find(CustomerQuery::All).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::MockClient;

    #[tokio::test]
    async fn test_register_customer_rejects_duplicate_cpf() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_find().return_ok(vec![Customer {
            id: CustomerId(1),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            cpf: "52998224725".to_string(),
            active: true,
        }]);

        let client = CustomerClient::new(mock.client());
        let result = client
            .register_customer(CustomerCreate {
                name: "Ana Clone".to_string(),
                email: "other@example.com".to_string(),
                cpf: "529.982.247-25".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(CustomerError::DuplicateCpf("52998224725".to_string()))
        );
        mock.verify();
    }
}
