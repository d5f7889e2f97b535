use tracing::{debug, info, instrument};
use crate::domain::{Rfq, RfqCreate, RfqPatch};
use crate::rfq_actor::{RfqAction, RfqError};
use crate::actor_framework::ResourceClient;

/// Client for interacting with the RFQ actor.
#[derive(Clone)]
pub struct RfqClient {
    inner: ResourceClient<Rfq>,
}

impl_basic_client!(RfqClient, Rfq, RfqError, rfq);

impl RfqClient {
    #[instrument(skip(self, rfq), fields(customer_email = %rfq.customer_email))]
    pub async fn create_rfq(&self, rfq: RfqCreate) -> Result<Rfq, RfqError> {
        debug!("Sending request");
        let rfq = self.inner.create(rfq).await?;
        info!(rfq_id = %rfq.id, rfq_number = %rfq.rfq_number, "RFQ created");
        Ok(rfq)
    }

    /// All RFQs, newest first. RFQs created within the same clock tick keep
    /// their creation order reversed.
    #[instrument(skip(self))]
    pub async fn list_newest_first(&self) -> Result<Vec<Rfq>, RfqError> {
        let mut rfqs = self.list_rfqs().await?;
        rfqs.reverse();
        rfqs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rfqs)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_rfq(&self, id: String, patch: RfqPatch) -> Result<Rfq, RfqError> {
        debug!("Sending request");
        let rfq = self.inner.update(id, patch).await?;
        info!(rfq_number = %rfq.rfq_number, status = %rfq.status, "RFQ updated");
        Ok(rfq)
    }

    #[instrument(skip(self))]
    pub async fn accept_quote(&self, id: String) -> Result<Rfq, RfqError> {
        self.respond(id, RfqAction::Accept).await
    }

    #[instrument(skip(self))]
    pub async fn reject_quote(&self, id: String) -> Result<Rfq, RfqError> {
        self.respond(id, RfqAction::Reject).await
    }

    async fn respond(&self, id: String, action: RfqAction) -> Result<Rfq, RfqError> {
        debug!(?action, "Sending request");
        let rfq = self.inner.perform_action(id, action).await?;
        info!(rfq_number = %rfq.rfq_number, status = %rfq.status, "Customer responded to quote");
        Ok(rfq)
    }
}
