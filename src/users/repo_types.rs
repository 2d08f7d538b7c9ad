use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row shape of the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
    pub department: Option<String>,
    pub gender: String,
    pub birth_date: String,
}

/// Stored user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String, // plain text, as submitted
    pub name: String,
    pub role: String,
    pub department: Option<String>,
    pub gender: String,
    pub birth_date: String,
}

/// Fields needed to insert a user; `id` is already generated.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
    pub department: Option<String>,
    pub gender: String,
    pub birth_date: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            email: r.email,
            password: r.password,
            name: r.name,
            role: r.role,
            department: r.department,
            gender: r.gender,
            birth_date: r.birth_date,
        }
    }
}

impl From<NewUser> for User {
    fn from(n: NewUser) -> Self {
        Self {
            id: n.id,
            email: n.email,
            password: n.password,
            name: n.name,
            role: n.role,
            department: n.department,
            gender: n.gender,
            birth_date: n.birth_date,
        }
    }
}
