//! Boilerplate reducers for entity client wrappers. Each wrapper is a
//! thin struct around a [`StoreClient`](store_actor::StoreClient); these
//! macros stamp out the constructor, the
//! [`EntityClient`](store_actor::EntityClient) impl and the named
//! get/delete methods so each client file only contains its
//! domain-specific operations.

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: store_actor::StoreClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_entity_client {
    ($client_name:ident, $entity:ty, $error:ty) => {
        #[async_trait::async_trait]
        impl store_actor::EntityClient<$entity> for $client_name {
            type Error = $error;

            fn inner(&self) -> &store_actor::StoreClient<$entity> {
                &self.inner
            }

            fn map_error(e: store_actor::StoreError) -> Self::Error {
                <$error>::from_store(e)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: $id) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from_store)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: $id) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await.map_err(<$error>::from_store)
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident) => {
        $crate::impl_client_new!($client_name, $entity);
        $crate::impl_entity_client!($client_name, $entity, $error);
        $crate::impl_client_methods!($client_name, $entity, $id, $error, $entity_name_snake);
    };
}
