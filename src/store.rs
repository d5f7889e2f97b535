//! Storage interface used by the HTTP layer.
//!
//! Handlers only ever see `Arc<dyn RecordStore>`, so the in-memory actor
//! backend can be swapped for a durable one without touching them.

use async_trait::async_trait;
use thiserror::Error;

use crate::admin_actor::AdminError;
use crate::domain::{
    AdminCreate, AdminUser, Product, ProductInput, Rfq, RfqCreate, RfqPatch, RfqWithProducts,
};
use crate::product_actor::ProductError;
use crate::rfq_actor::RfqError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("invalid record: {0}")]
    Invalid(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<RfqError> for StoreError {
    fn from(err: RfqError) -> Self {
        match err {
            RfqError::NotFound(id) => StoreError::NotFound(id),
            RfqError::ValidationError(msg) => StoreError::Invalid(msg),
            RfqError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
        }
    }
}

impl From<ProductError> for StoreError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::ValidationError(msg) => StoreError::Invalid(msg),
            ProductError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
        }
    }
}

impl From<AdminError> for StoreError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::AlreadyExists(username) => StoreError::AlreadyExists(username),
            AdminError::ValidationError(msg) => StoreError::Invalid(msg),
            AdminError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
        }
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_rfq(&self, rfq: RfqCreate) -> Result<Rfq, StoreError>;
    async fn get_rfq(&self, id: &str) -> Result<Option<Rfq>, StoreError>;
    /// Every RFQ, newest first by creation time.
    async fn list_rfqs(&self) -> Result<Vec<Rfq>, StoreError>;
    /// Shallow merge; [`StoreError::NotFound`] when `id` is unknown.
    async fn update_rfq(&self, id: &str, patch: RfqPatch) -> Result<Rfq, StoreError>;
    async fn accept_quote(&self, id: &str) -> Result<Rfq, StoreError>;
    async fn reject_quote(&self, id: &str) -> Result<Rfq, StoreError>;

    async fn create_product(&self, rfq_id: &str, product: ProductInput) -> Result<Product, StoreError>;
    async fn products_for_rfq(&self, rfq_id: &str) -> Result<Vec<Product>, StoreError>;

    async fn admin_by_username(&self, username: &str) -> Result<Option<AdminUser>, StoreError>;
    async fn create_admin(&self, admin: AdminCreate) -> Result<AdminUser, StoreError>;

    /// Creates the RFQ, then each product against it, in order.
    async fn submit_rfq(
        &self,
        rfq: RfqCreate,
        products: Vec<ProductInput>,
    ) -> Result<RfqWithProducts, StoreError> {
        let rfq = self.create_rfq(rfq).await?;
        let mut created = Vec::with_capacity(products.len());
        for product in products {
            created.push(self.create_product(&rfq.id, product).await?);
        }
        Ok(RfqWithProducts { rfq, products: created })
    }

    async fn rfq_with_products(&self, id: &str) -> Result<Option<RfqWithProducts>, StoreError> {
        let Some(rfq) = self.get_rfq(id).await? else {
            return Ok(None);
        };
        let products = self.products_for_rfq(&rfq.id).await?;
        Ok(Some(RfqWithProducts { rfq, products }))
    }

    async fn list_rfqs_with_products(&self) -> Result<Vec<RfqWithProducts>, StoreError> {
        let rfqs = self.list_rfqs().await?;
        let mut listed = Vec::with_capacity(rfqs.len());
        for rfq in rfqs {
            let products = self.products_for_rfq(&rfq.id).await?;
            listed.push(RfqWithProducts { rfq, products });
        }
        Ok(listed)
    }
}
