use tracing::{debug, instrument};
use crate::domain::{Product, ProductCreate, ProductInput};
use crate::product_actor::ProductError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn create_product(&self, rfq_id: String, product: ProductInput) -> Result<Product, ProductError> {
        debug!("Sending request");
        let payload = ProductCreate { rfq_id, product };
        Ok(self.inner.create(payload).await?)
    }

    /// Products referencing `rfq_id`, in submission order.
    #[instrument(skip(self))]
    pub async fn products_for_rfq(&self, rfq_id: &str) -> Result<Vec<Product>, ProductError> {
        let rfq_id = rfq_id.to_string();
        Ok(self.inner.list_where(move |p: &Product| p.rfq_id == rfq_id).await?)
    }
}
