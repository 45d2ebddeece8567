use super::{CREATED, OK, TEAM_ADD_PATH, TEAM_GET_PATH};
use crate::{
    check::{check, Check},
    harness::{Driver, Vu},
    http::Response,
    payload::{TeamCreationRequest, TeamResponse},
};

pub struct TeamDriver;

impl TeamDriver {
    pub fn lookup_checks(team_name: &str) -> [Check<'_>; 2] {
        [
            Check::status("status is 200", OK),
            Check::new("correct team name", move |response: &Response| {
                response
                    .json::<TeamResponse>()
                    .map(|team| team.team_name == team_name)
                    .unwrap_or(false)
            }),
        ]
    }
}

impl Driver for TeamDriver {
    type Setup = ();

    fn name(&self) -> &'static str {
        "team"
    }

    async fn setup(&self, _vu: &mut Vu) {}

    async fn iteration(&self, vu: &mut Vu, _data: &()) {
        let team = TeamCreationRequest::random(&mut rand::rng());

        let response = vu.client.post(TEAM_ADD_PATH).json(&team).send().await;
        vu.tally.record_request(&response);
        check(
            &mut vu.tally,
            &response,
            &[Check::status("status is 201", CREATED)],
        );

        let response = vu
            .client
            .get(TEAM_GET_PATH)
            .query("team_name", &team.team_name)
            .send()
            .await;
        vu.tally.record_request(&response);
        check(
            &mut vu.tally,
            &response,
            &TeamDriver::lookup_checks(&team.team_name),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        harness::{self, Options},
        http::Client,
        metrics::Tally,
    };
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    fn lookup(tally: &mut Tally, status: u16, body: &str, expected: &str) -> bool {
        let response = Response::new(status, body, Duration::ZERO);
        check(tally, &response, &TeamDriver::lookup_checks(expected))
    }

    #[test]
    fn should_accept_lookup_with_submitted_name() {
        let mut tally = Tally::default();

        let passed = lookup(
            &mut tally,
            200,
            r#"{"team_name":"team-X","members":[{"user_id":"u1","username":"user1","is_active":true}]}"#,
            "team-X",
        );

        assert!(passed);
        assert_eq!(tally.checks["correct team name"].passes, 1);
    }

    #[test]
    fn should_reject_lookup_with_other_name() {
        let mut tally = Tally::default();

        let passed = lookup(&mut tally, 200, r#"{"team_name":"team-Y"}"#, "team-X");

        assert!(!passed);
        assert_eq!(tally.checks["status is 200"].passes, 1);
        assert_eq!(tally.checks["correct team name"].fails, 1);
    }

    #[test]
    fn should_reject_lookup_with_unreadable_body() {
        let mut tally = Tally::default();

        let passed = lookup(
            &mut tally,
            404,
            r#"{"error":{"code":"NOT_FOUND","message":"team not found"}}"#,
            "team-X",
        );

        assert!(!passed);
        assert_eq!(tally.checks["status is 200"].fails, 1);
        assert_eq!(tally.checks["correct team name"].fails, 1);
    }

    #[tokio::test]
    async fn should_create_then_look_up_team() -> Result<()> {
        let mut server = Server::new_async().await;
        let add = server
            .mock("POST", TEAM_ADD_PATH)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Regex(r#""team_name":"team[0-9a-f-]{36}""#.into()))
            .with_status(201)
            .expect(1)
            .create_async()
            .await;
        let get = server
            .mock("GET", TEAM_GET_PATH)
            .match_query(Matcher::Regex("team_name=team".into()))
            .with_status(200)
            .with_body(r#"{"team_name":"someone-else","members":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let mut vu = Vu::new(1, Client::new(server.url()));
        TeamDriver.iteration(&mut vu, &()).await;

        add.assert_async().await;
        get.assert_async().await;
        assert_eq!(vu.tally.requests.count, 2);
        assert_eq!(vu.tally.checks["status is 201"].passes, 1);
        assert_eq!(vu.tally.checks["status is 200"].passes, 1);
        // the mock cannot echo the random name back
        assert_eq!(vu.tally.checks["correct team name"].fails, 1);

        Ok(())
    }

    #[tokio::test]
    async fn should_look_up_the_submitted_team_name() -> Result<()> {
        let mut server = Server::new_async().await;
        let add = server
            .mock("POST", TEAM_ADD_PATH)
            .with_status(201)
            .expect(5)
            .create_async()
            .await;
        let get = server
            .mock("GET", TEAM_GET_PATH)
            .match_query(Matcher::Regex("team_name=team".into()))
            .with_status(200)
            .with_body_from_request(|request| {
                let team_name = request
                    .path_and_query()
                    .split("team_name=")
                    .nth(1)
                    .unwrap_or_default()
                    .to_owned();
                format!(r#"{{"team_name":"{}","members":[]}}"#, team_name).into()
            })
            .expect(5)
            .create_async()
            .await;

        let mut vu = Vu::new(1, Client::new(server.url()));
        for _ in 0..5 {
            TeamDriver.iteration(&mut vu, &()).await;
        }

        add.assert_async().await;
        get.assert_async().await;
        assert_eq!(vu.tally.checks["status is 201"].passes, 5);
        assert_eq!(vu.tally.checks["status is 200"].passes, 5);
        assert_eq!(vu.tally.checks["correct team name"].passes, 5);
        assert_eq!(vu.tally.checks["correct team name"].fails, 0);

        Ok(())
    }

    #[tokio::test]
    async fn should_record_failures_without_stopping() -> Result<()> {
        let mut server = Server::new_async().await;
        let add = server
            .mock("POST", TEAM_ADD_PATH)
            .with_status(400)
            .with_body(r#"{"error":{"code":"TEAM_EXISTS","message":"team already exists"}}"#)
            .expect_at_least(1)
            .create_async()
            .await;
        let get = server
            .mock("GET", TEAM_GET_PATH)
            .match_query(Matcher::Any)
            .with_status(404)
            .expect_at_least(1)
            .create_async()
            .await;

        let summary = harness::run(
            TeamDriver,
            Client::new(server.url()),
            Options::new(2, Duration::from_millis(50))?,
        )
        .await?;

        add.assert_async().await;
        get.assert_async().await;
        assert!(summary.tally.iterations >= 2);
        assert_eq!(
            summary.tally.checks["status is 201"].fails,
            summary.tally.iterations
        );
        assert_eq!(summary.tally.requests.failed, summary.tally.requests.count);
        assert!(!summary.checks_passed());

        Ok(())
    }
}
