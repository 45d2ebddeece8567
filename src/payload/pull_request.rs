use super::ids;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestCreationRequest {
    pub author_id: String,
    pub pull_request_id: String,
    pub pull_request_name: String,
}

impl PullRequestCreationRequest {
    pub fn new(
        author_id: impl Into<String>,
        pull_request_id: impl Into<String>,
        pull_request_name: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            pull_request_id: pull_request_id.into(),
            pull_request_name: pull_request_name.into(),
        }
    }

    pub fn for_author(author_id: impl Into<String>) -> Self {
        Self::new(author_id, ids::uuid(), ids::pull_request_name())
    }
}
