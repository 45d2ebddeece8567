use crate::{
    http::Client,
    metrics::{Summary, Tally},
};
use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("At least one virtual worker is required")]
    NoWorkers,
    #[error("Run duration must be greater than zero")]
    ZeroDuration,
    #[error("Virtual worker {id} stopped unexpectedly")]
    WorkerFailed {
        id: usize,
        #[source]
        cause: tokio::task::JoinError,
    },
}

pub struct Vu {
    pub id: usize,
    pub client: Client,
    pub tally: Tally,
}

impl Vu {
    pub fn new(id: usize, client: Client) -> Self {
        Vu {
            id,
            client,
            tally: Tally::default(),
        }
    }
}

pub trait Driver: Send + Sync + 'static {
    type Setup: Send + Sync + 'static;

    fn name(&self) -> &'static str;

    fn setup(&self, vu: &mut Vu) -> impl Future<Output = Self::Setup> + Send;

    fn iteration(&self, vu: &mut Vu, data: &Self::Setup) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub vus: usize,
    pub duration: Duration,
}

impl Options {
    pub fn new(vus: usize, duration: Duration) -> Result<Self, Error> {
        if vus == 0 {
            return Err(Error::NoWorkers);
        }

        if duration.is_zero() {
            return Err(Error::ZeroDuration);
        }

        Ok(Options { vus, duration })
    }
}

pub async fn run<D: Driver>(driver: D, client: Client, options: Options) -> Result<Summary, Error> {
    let driver = Arc::new(driver);

    log::info!("Running setup for {}", driver.name());
    let mut setup_vu = Vu::new(0, client.clone());
    let data = Arc::new(driver.setup(&mut setup_vu).await);

    log::info!(
        "Starting {} virtual workers for {:?}",
        options.vus,
        options.duration
    );
    let started = Instant::now();
    let deadline = started + options.duration;

    let handles: Vec<_> = (1..=options.vus)
        .map(|id| {
            let driver = Arc::clone(&driver);
            let data = Arc::clone(&data);
            let mut vu = Vu::new(id, client.clone());

            let handle = tokio::spawn(async move {
                while Instant::now() < deadline {
                    driver.iteration(&mut vu, data.as_ref()).await;
                    vu.tally.iterations += 1;
                }
                log::trace!("vu {} done after {} iterations", vu.id, vu.tally.iterations);
                vu.tally
            });

            (id, handle)
        })
        .collect();

    let mut tally = setup_vu.tally;
    for (id, handle) in handles {
        let worker = handle
            .await
            .map_err(|cause| Error::WorkerFailed { id, cause })?;
        tally.merge(worker);
    }

    Ok(Summary {
        driver: driver.name().to_owned(),
        vus: options.vus,
        elapsed: started.elapsed(),
        tally,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDriver {
        setups: Arc<AtomicUsize>,
    }

    impl Driver for CountingDriver {
        type Setup = String;

        fn name(&self) -> &'static str {
            "counting"
        }

        async fn setup(&self, vu: &mut Vu) -> String {
            self.setups.fetch_add(1, Ordering::SeqCst);
            vu.tally.record_check("setup ran", vu.id == 0);
            format!("fixture-{}", self.setups.load(Ordering::SeqCst))
        }

        async fn iteration(&self, vu: &mut Vu, data: &String) {
            vu.tally.record_check("sees fixture", data == "fixture-1");
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    }

    fn client() -> Client {
        Client::new("http://127.0.0.1:9")
    }

    #[test]
    fn should_reject_invalid_options() {
        assert!(matches!(
            Options::new(0, Duration::from_secs(1)),
            Err(Error::NoWorkers)
        ));
        assert!(matches!(
            Options::new(1, Duration::ZERO),
            Err(Error::ZeroDuration)
        ));
        assert!(Options::new(100, Duration::from_secs(30)).is_ok());
    }

    #[tokio::test]
    async fn should_run_setup_once_and_share_it() -> anyhow::Result<()> {
        let setups = Arc::new(AtomicUsize::new(0));
        let driver = CountingDriver {
            setups: Arc::clone(&setups),
        };

        let summary = run(
            driver,
            client(),
            Options::new(4, Duration::from_millis(60))?,
        )
        .await?;

        assert_eq!(setups.load(Ordering::SeqCst), 1);
        assert_eq!(summary.tally.checks["setup ran"].passes, 1);

        let seen = summary.tally.checks["sees fixture"];
        assert_eq!(seen.fails, 0);
        assert_eq!(seen.passes, summary.tally.iterations);
        assert!(summary.tally.iterations >= 4);
        assert!(summary.checks_passed());
        assert_eq!(summary.vus, 4);
        assert_eq!(summary.driver, "counting");

        Ok(())
    }

    #[tokio::test]
    async fn should_stop_after_the_duration() -> anyhow::Result<()> {
        let driver = CountingDriver {
            setups: Arc::new(AtomicUsize::new(0)),
        };

        let summary = run(driver, client(), Options::new(1, Duration::from_millis(20))?).await?;

        assert!(summary.elapsed >= Duration::from_millis(20));
        assert!(summary.elapsed < Duration::from_secs(2));

        Ok(())
    }
}
