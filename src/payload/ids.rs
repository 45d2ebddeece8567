use uuid::Uuid;

pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

pub fn team_name() -> String {
    format!("team{}", uuid())
}

pub fn username() -> String {
    format!("username{}", uuid())
}

pub fn pull_request_name() -> String {
    format!("PR-{}", uuid())
}
