use tracing::{debug, info, instrument};
use crate::domain::{AdminCreate, AdminUser};
use crate::admin_actor::AdminError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the AdminUser actor.
#[derive(Clone)]
pub struct AdminClient {
    inner: ResourceClient<AdminUser>,
}

impl_basic_client!(AdminClient, AdminUser, AdminError, admin);

impl AdminClient {
    #[instrument(skip(self, admin), fields(username = %admin.username))]
    pub async fn create_admin(&self, admin: AdminCreate) -> Result<AdminUser, AdminError> {
        debug!("Sending request");
        let admin = self.inner.create(admin).await?;
        info!(admin_id = %admin.id, "Admin created");
        Ok(admin)
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, AdminError> {
        let username = username.to_string();
        let mut admins = self.inner.list_where(move |a: &AdminUser| a.username == username).await?;
        Ok(admins.pop())
    }
}
