use super::{ids, member::Member};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_MEMBERS: usize = 5;
pub const MAX_MEMBERS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCreationRequest {
    pub team_name: String,
    pub members: Vec<Member>,
}

impl TeamCreationRequest {
    pub fn new(team_name: impl Into<String>, members: Vec<Member>) -> Self {
        TeamCreationRequest {
            team_name: team_name.into(),
            members,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = rng.random_range(MIN_MEMBERS..=MAX_MEMBERS);
        let members = (0..count).map(|_| Member::random()).collect();

        TeamCreationRequest::new(ids::team_name(), members)
    }

    pub fn single_member(author_id: impl Into<String>) -> Self {
        let member = Member::new(author_id, format!("username-{}", ids::uuid()));

        TeamCreationRequest::new(format!("team-{}", ids::uuid()), vec![member])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamResponse {
    pub team_name: String,
}
