/// A staff account allowed into the admin dashboard.
///
/// Only the argon2 PHC string is kept; the plaintext password never reaches
/// the store.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

/// Payload for creating a new admin.
#[derive(Debug, Clone)]
pub struct AdminCreate {
    pub username: String,
    pub password_hash: String,
}
