use super::ids;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl Member {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Member {
            user_id: user_id.into(),
            username: username.into(),
            is_active: true,
        }
    }

    pub fn random() -> Self {
        Member::new(ids::uuid(), ids::username())
    }
}
