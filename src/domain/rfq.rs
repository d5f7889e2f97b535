use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Product;

/// Prefix of the human-readable RFQ number, e.g. `RFQ2025-007`.
pub const RFQ_NUMBER_PREFIX: &str = "RFQ2025-";

/// Formats the display number for the `sequence`-th RFQ of a store.
pub fn rfq_number(sequence: u64) -> String {
    format!("{RFQ_NUMBER_PREFIX}{sequence:03}")
}

/// Where an RFQ sits in the quote and fulfillment flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfqStatus {
    #[default]
    New,
    Quoted,
    Paid,
    Shipped,
    Delivered,
    Rejected,
}

impl RfqStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RfqStatus::New => "new",
            RfqStatus::Quoted => "quoted",
            RfqStatus::Paid => "paid",
            RfqStatus::Shipped => "shipped",
            RfqStatus::Delivered => "delivered",
            RfqStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RfqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's request for quote.
///
/// `id`, `rfq_number` and `created_at` are fixed at creation; everything else
/// changes only through [`RfqPatch`] or a customer accept/reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfq {
    pub id: String,
    pub rfq_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_company: Option<String>,
    pub customer_country: Option<String>,
    pub status: RfqStatus,
    pub quote_price: Option<String>,
    pub quote_shipping: Option<String>,
    pub quote_total: Option<String>,
    pub quote_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Customer details submitted with a new RFQ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RfqCreate {
    #[validate(length(min = 1, message = "customer name is required"))]
    pub customer_name: String,
    #[validate(email(message = "customer email is invalid"))]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_company: Option<String>,
    #[serde(default)]
    pub customer_country: Option<String>,
}

impl RfqCreate {
    #[cfg(test)]
    pub fn new(customer_name: impl Into<String>, customer_email: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: None,
            customer_company: None,
            customer_country: None,
        }
    }
}

/// Shallow update applied by staff. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RfqPatch {
    #[validate(length(min = 1, message = "customer name must not be empty"))]
    pub customer_name: Option<String>,
    #[validate(email(message = "customer email is invalid"))]
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_company: Option<String>,
    pub customer_country: Option<String>,
    pub status: Option<RfqStatus>,
    pub quote_price: Option<String>,
    pub quote_shipping: Option<String>,
    pub quote_total: Option<String>,
    pub quote_notes: Option<String>,
}

impl RfqPatch {
    #[cfg(test)]
    pub fn status(status: RfqStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}

/// Read model: an RFQ with the products submitted alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfqWithProducts {
    #[serde(flatten)]
    pub rfq: Rfq,
    pub products: Vec<Product>,
}
