use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// Columns are always read in the order `id, name, email, age`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    #[serde(skip_serializing_if = "is_unassigned")]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

fn is_unassigned(id: &i32) -> bool {
    *id == 0
}

/// Client-supplied fields for create and update.
///
/// Any `id` in the request body is dropped here; the database assigns ids on
/// insert and the path identifier is authoritative on update. Missing fields
/// decode as empty/zero, only mistyped ones are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl UserPayload {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}
