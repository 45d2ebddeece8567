use super::{CREATED, PULL_REQUEST_CREATE_PATH, TEAM_ADD_PATH};
use crate::{
    check::{check, Check},
    harness::{Driver, Vu},
    payload::{ids, PullRequestCreationRequest, TeamCreationRequest},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
}

pub struct PullRequestDriver;

impl Driver for PullRequestDriver {
    type Setup = Author;

    fn name(&self) -> &'static str {
        "pull-request"
    }

    async fn setup(&self, vu: &mut Vu) -> Author {
        let author = Author { id: ids::uuid() };
        let team = TeamCreationRequest::single_member(&author.id);

        let response = vu.client.post(TEAM_ADD_PATH).json(&team).send().await;
        vu.tally.record_request(&response);
        if check(
            &mut vu.tally,
            &response,
            &[Check::status("team created", CREATED)],
        ) {
            log::info!("Created team {} with author {}", team.team_name, author.id);
        } else {
            log::warn!(
                "Could not create team {} (status {}), continuing with author {}",
                team.team_name,
                response.status,
                author.id
            );
        }

        author
    }

    async fn iteration(&self, vu: &mut Vu, author: &Author) {
        let pull_request = PullRequestCreationRequest::for_author(&author.id);

        let response = vu
            .client
            .post(PULL_REQUEST_CREATE_PATH)
            .json(&pull_request)
            .send()
            .await;
        vu.tally.record_request(&response);
        check(
            &mut vu.tally,
            &response,
            &[Check::status("status is 201", CREATED)],
        );
    }
}
