use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::auth::hash_password;
use crate::clients::{AdminClient, ProductClient, RfqClient};
use crate::domain::{AdminCreate, AdminUser, Product, Rfq};
use crate::store::{RecordStore, StoreError};
use super::ActorStore;

/// The application's record store: one resource actor per record type.
///
/// Responsible for starting the actors, wiring their clients together, and
/// waiting for them on shutdown.
pub struct RfqSystem {
    store: ActorStore,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn next_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl RfqSystem {
    pub fn new(buffer_size: usize) -> Self {
        info!(buffer_size, "Starting RFQ system");

        let (rfq_actor, rfq_resource_client) = ResourceActor::<Rfq>::new("rfqs", buffer_size, next_uuid);
        let rfq_handle = tokio::spawn(rfq_actor.run());

        let (product_actor, product_resource_client) = ResourceActor::<Product>::new("products", buffer_size, next_uuid);
        let product_handle = tokio::spawn(product_actor.run());

        let (admin_actor, admin_resource_client) = ResourceActor::<AdminUser>::new("admins", buffer_size, next_uuid);
        let admin_handle = tokio::spawn(admin_actor.run());

        Self {
            store: ActorStore {
                rfq_client: RfqClient::new(rfq_resource_client),
                product_client: ProductClient::new(product_resource_client),
                admin_client: AdminClient::new(admin_resource_client),
            },
            handles: vec![rfq_handle, product_handle, admin_handle],
        }
    }

    /// A handle to the records, for injecting into the HTTP layer.
    pub fn store(&self) -> ActorStore {
        self.store.clone()
    }

    /// Creates an admin account, hashing `password` before it is stored.
    #[instrument(skip(self, password))]
    pub async fn seed_admin(&self, username: &str, password: &str) -> Result<AdminUser, StoreError> {
        let password_hash = hash_password(password).map_err(|e| StoreError::Invalid(e.to_string()))?;
        let admin = self.store.create_admin(AdminCreate {
            username: username.to_string(),
            password_hash,
        }).await?;
        info!(admin_id = %admin.id, "Admin account seeded");
        Ok(admin)
    }

    /// Stops every actor once all outstanding store handles are dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Actors stop when their channels close, which happens once every
        // clone of the store (including the router's) is gone.
        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
