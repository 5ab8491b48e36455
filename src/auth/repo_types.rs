use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // internal key, never on the wire
    pub name: String,               // display name chosen at signup
    pub email: String,              // unique, stored as submitted
    #[serde(skip_serializing)]
    pub password_hash: String,      // argon2 PHC string
    pub created_at: OffsetDateTime,
}

/// Fields supplied on signup, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
