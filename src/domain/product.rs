use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product details were extracted from the source page.
pub const AUTO_EXTRACTED: u8 = 0;
/// Product details were typed in by the customer.
pub const MANUAL_ENTRY: u8 = 1;

fn default_quantity() -> u32 {
    1
}

fn default_is_manual() -> u8 {
    AUTO_EXTRACTED
}

/// A product line on an RFQ.
///
/// `price` is free text as shown on the source page (e.g. `₹499`), not an
/// amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub rfq_id: String,
    pub url: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub quantity: u32,
    pub is_manual: u8,
}

/// A product as submitted by the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub url: Option<String>,
    #[validate(length(min = 1, message = "product title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    #[serde(default = "default_is_manual")]
    #[validate(range(max = 1, message = "isManual must be 0 or 1"))]
    pub is_manual: u8,
}

impl ProductInput {
    #[cfg(test)]
    pub fn manual(title: impl Into<String>) -> Self {
        Self {
            url: None,
            title: title.into(),
            description: None,
            image: None,
            price: None,
            quantity: default_quantity(),
            is_manual: MANUAL_ENTRY,
        }
    }
}

/// Payload stored by the product actor: the input plus its owning RFQ.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub rfq_id: String,
    pub product: ProductInput,
}
