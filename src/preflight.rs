use crate::http::Client;

pub const HEALTH_PATH: &str = "/health";

pub async fn health(client: &Client) -> bool {
    let response = client.get(HEALTH_PATH).send().await;

    if response.is_status(200) {
        log::debug!("{} is healthy", client.base_url());
        return true;
    }

    match &response.error {
        Some(error) => log::warn!("{} is unreachable: {}", client.base_url(), error),
        None => log::warn!(
            "{}{} answered with status {}",
            client.base_url(),
            HEALTH_PATH,
            response.status
        ),
    }

    false
}
