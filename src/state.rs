use std::sync::Arc;

use crate::users::repo::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn from_parts(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
