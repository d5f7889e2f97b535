use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{rfq_number, Rfq, RfqCreate, RfqPatch, RfqStatus};
use super::actions::RfqAction;

impl Entity for Rfq {
    type Id = String;
    type CreatePayload = RfqCreate;
    type Patch = RfqPatch;
    type Action = RfqAction;
    type ActionResult = Rfq;

    fn id(&self) -> &String { &self.id }

    /// Creates a new RFQ in the `new` state.
    ///
    /// The display number comes from the actor's creation sequence, so it is
    /// unique and increasing for the lifetime of the store.
    fn from_create(id: String, sequence: u64, payload: RfqCreate) -> Result<Self, String> {
        let now = Utc::now();
        Ok(Self {
            id,
            rfq_number: rfq_number(sequence),
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            customer_phone: payload.customer_phone,
            customer_company: payload.customer_company,
            customer_country: payload.customer_country,
            status: RfqStatus::New,
            quote_price: None,
            quote_shipping: None,
            quote_total: None,
            quote_notes: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges every provided field and refreshes `updated_at`.
    fn on_update(&mut self, patch: RfqPatch) -> Result<(), String> {
        let RfqPatch {
            customer_name,
            customer_email,
            customer_phone,
            customer_company,
            customer_country,
            status,
            quote_price,
            quote_shipping,
            quote_total,
            quote_notes,
        } = patch;

        if let Some(name) = customer_name {
            self.customer_name = name;
        }
        if let Some(email) = customer_email {
            self.customer_email = email;
        }
        if customer_phone.is_some() {
            self.customer_phone = customer_phone;
        }
        if customer_company.is_some() {
            self.customer_company = customer_company;
        }
        if customer_country.is_some() {
            self.customer_country = customer_country;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if quote_price.is_some() {
            self.quote_price = quote_price;
        }
        if quote_shipping.is_some() {
            self.quote_shipping = quote_shipping;
        }
        if quote_total.is_some() {
            self.quote_total = quote_total;
        }
        if quote_notes.is_some() {
            self.quote_notes = quote_notes;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    fn handle_action(&mut self, action: RfqAction) -> Result<Rfq, String> {
        self.status = match action {
            RfqAction::Accept => RfqStatus::Paid,
            RfqAction::Reject => RfqStatus::Rejected,
        };
        self.updated_at = Utc::now();
        Ok(self.clone())
    }
}
