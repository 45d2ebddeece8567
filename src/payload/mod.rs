pub mod ids;
mod error_response;
mod member;
mod pull_request;
mod team;

pub use error_response::ErrorResponse;
#[cfg(test)]
pub use member::Member;
pub use pull_request::PullRequestCreationRequest;
pub use team::{TeamCreationRequest, TeamResponse};
