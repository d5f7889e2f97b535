use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, MANUAL_ENTRY};

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Patch = (); // Products are never edited after submission
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    fn from_create(id: String, _sequence: u64, payload: ProductCreate) -> Result<Self, String> {
        let ProductCreate { rfq_id, product } = payload;
        Ok(Self {
            id,
            rfq_id,
            url: product.url,
            title: product.title.trim().to_string(),
            description: product.description,
            image: product.image,
            price: product.price,
            quantity: product.quantity,
            is_manual: product.is_manual,
        })
    }

    /// Guards the store against payloads that skipped request validation.
    fn on_create(&mut self) -> Result<(), String> {
        if self.rfq_id.is_empty() {
            return Err("product must reference an RFQ".to_string());
        }
        if self.title.is_empty() {
            return Err("product title is required".to_string());
        }
        if self.quantity == 0 {
            return Err("quantity must be at least 1".to_string());
        }
        if self.is_manual > MANUAL_ENTRY {
            return Err("isManual must be 0 or 1".to_string());
        }
        Ok(())
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
