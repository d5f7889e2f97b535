use crate::actor_framework::Entity;
use crate::domain::{AdminCreate, AdminUser};

impl Entity for AdminUser {
    type Id = String;
    type CreatePayload = AdminCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    fn from_create(id: String, _sequence: u64, payload: AdminCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            username: payload.username,
            password_hash: payload.password_hash,
        })
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.username)
    }

    fn on_create(&mut self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("username is required".to_string());
        }
        if !self.password_hash.starts_with('$') {
            return Err("password must be stored as a PHC hash".to_string());
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
