use async_trait::async_trait;

use crate::clients::{AdminClient, ProductClient, RfqClient};
use crate::domain::{AdminCreate, AdminUser, Product, ProductInput, Rfq, RfqCreate, RfqPatch};
use crate::store::{RecordStore, StoreError};

/// [`RecordStore`] backed by the in-memory resource actors.
///
/// Cloning is cheap; every clone talks to the same actors.
#[derive(Clone)]
pub struct ActorStore {
    pub rfq_client: RfqClient,
    pub product_client: ProductClient,
    pub admin_client: AdminClient,
}

#[async_trait]
impl RecordStore for ActorStore {
    async fn create_rfq(&self, rfq: RfqCreate) -> Result<Rfq, StoreError> {
        Ok(self.rfq_client.create_rfq(rfq).await?)
    }

    async fn get_rfq(&self, id: &str) -> Result<Option<Rfq>, StoreError> {
        Ok(self.rfq_client.get_rfq(id.to_string()).await?)
    }

    async fn list_rfqs(&self) -> Result<Vec<Rfq>, StoreError> {
        Ok(self.rfq_client.list_newest_first().await?)
    }

    async fn update_rfq(&self, id: &str, patch: RfqPatch) -> Result<Rfq, StoreError> {
        Ok(self.rfq_client.update_rfq(id.to_string(), patch).await?)
    }

    async fn accept_quote(&self, id: &str) -> Result<Rfq, StoreError> {
        Ok(self.rfq_client.accept_quote(id.to_string()).await?)
    }

    async fn reject_quote(&self, id: &str) -> Result<Rfq, StoreError> {
        Ok(self.rfq_client.reject_quote(id.to_string()).await?)
    }

    async fn create_product(&self, rfq_id: &str, product: ProductInput) -> Result<Product, StoreError> {
        Ok(self.product_client.create_product(rfq_id.to_string(), product).await?)
    }

    async fn products_for_rfq(&self, rfq_id: &str) -> Result<Vec<Product>, StoreError> {
        Ok(self.product_client.products_for_rfq(rfq_id).await?)
    }

    async fn admin_by_username(&self, username: &str) -> Result<Option<AdminUser>, StoreError> {
        Ok(self.admin_client.find_by_username(username).await?)
    }

    async fn create_admin(&self, admin: AdminCreate) -> Result<AdminUser, StoreError> {
        Ok(self.admin_client.create_admin(admin).await?)
    }
}
