mod pull_request;
mod team;

pub use pull_request::PullRequestDriver;
pub use team::TeamDriver;

pub const TEAM_ADD_PATH: &str = "/team/add";
pub const TEAM_GET_PATH: &str = "/team/get";
pub const PULL_REQUEST_CREATE_PATH: &str = "/pullRequest/create";

pub const CREATED: u16 = 201;
pub const OK: u16 = 200;
