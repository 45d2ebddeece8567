use crate::{http::Response, metrics::Tally, payload::ErrorResponse};

pub type Predicate<'a> = Box<dyn Fn(&Response) -> bool + Send + Sync + 'a>;

pub struct Check<'a> {
    pub name: &'static str,
    predicate: Predicate<'a>,
}

impl<'a> Check<'a> {
    pub fn new(
        name: &'static str,
        predicate: impl Fn(&Response) -> bool + Send + Sync + 'a,
    ) -> Self {
        Check {
            name,
            predicate: Box::new(predicate),
        }
    }

    pub fn status(name: &'static str, status: u16) -> Self {
        Check::new(name, move |response| response.is_status(status))
    }

    pub fn evaluate(&self, response: &Response) -> bool {
        (self.predicate)(response)
    }
}

pub fn check(tally: &mut Tally, response: &Response, checks: &[Check<'_>]) -> bool {
    let mut all_passed = true;

    for check in checks {
        let passed = check.evaluate(response);
        tally.record_check(check.name, passed);

        if !passed {
            all_passed = false;
            log::debug!(
                "check '{}' failed: status {}{}",
                check.name,
                response.status,
                failure_detail(response)
            );
        }
    }

    all_passed
}

fn failure_detail(response: &Response) -> String {
    if let Some(error) = &response.error {
        return format!(", {}", error);
    }

    match ErrorResponse::parse(&response.body) {
        Some(err) => format!(", {}: {}", err.error.code, err.error.message),
        None => String::new(),
    }
}
