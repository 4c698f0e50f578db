use crate::config::Config;
use crate::error::AppError;
use governor::{clock::DefaultClock, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use std::io;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoints;
use super::models::*;

const MAX_RETRIES: u32 = 3;
const RATE_LIMIT_POLL: Duration = Duration::from_millis(25);
const USER_AGENT: &str = concat!("champ_catalog/", env!("CARGO_PKG_VERSION"));

/// The JSON-fetching capability the catalog depends on.
///
/// Implementations must be shareable across the worker threads that run
/// detail and skin fetches.
pub trait ChampionFeed: Send + Sync {
    /// Current release tag (first entry of the versions feed).
    fn latest_version(&self) -> Result<String, AppError>;

    /// The full roster for a release, in feed order.
    fn roster(&self, version: &str) -> Result<Vec<ChampionSummaryDto>, AppError>;

    /// Long-form data for one champion. Skins ride along in the same payload.
    fn champion_detail(&self, version: &str, champion_id: &str)
        -> Result<ChampionDetailDto, AppError>;
}

pub struct DataDragonClient {
    agent: ureq::Agent,
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl DataDragonClient {
    pub fn new(config: Config) -> Self {
        let per_second = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(per_second));
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build();
        DataDragonClient {
            agent,
            config,
            rate_limiter,
        }
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    fn wait_for_slot(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(RATE_LIMIT_POLL);
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            self.wait_for_slot();
            debug!(url, attempt = retry_count + 1, "GET");

            match self.agent.get(url).call() {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| self.read_error(e));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    warn!(url, wait_ms, "rate limited by CDN, backing off");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(404, _)) => {
                    return Err(AppError::NotFound(url.to_string()));
                }
                Err(ureq::Error::Status(code, _)) => {
                    return Err(AppError::HttpError(format!("{} returned status {}", url, code)));
                }
                Err(ureq::Error::Transport(transport)) => {
                    if is_timeout(&transport) {
                        return Err(AppError::Timeout(self.config.timeout_secs));
                    }
                    return Err(AppError::HttpError(transport.to_string()));
                }
            }
        }
    }

    fn read_error(&self, err: io::Error) -> AppError {
        if is_timeout_kind(err.kind()) {
            AppError::Timeout(self.config.timeout_secs)
        } else {
            AppError::HttpError(err.to_string())
        }
    }
}

impl ChampionFeed for DataDragonClient {
    fn latest_version(&self) -> Result<String, AppError> {
        let body = self.execute_request(endpoints::VERSIONS_URL)?;
        decode_latest_version(&body)
    }

    fn roster(&self, version: &str) -> Result<Vec<ChampionSummaryDto>, AppError> {
        let url = endpoints::roster_url(version, self.locale());
        let body = self.execute_request(&url)?;
        RosterResponse::decode(&body)
    }

    fn champion_detail(
        &self,
        version: &str,
        champion_id: &str,
    ) -> Result<ChampionDetailDto, AppError> {
        let url = endpoints::detail_url(version, self.locale(), champion_id);
        let body = self.execute_request(&url).map_err(|e| match e {
            AppError::NotFound(_) => AppError::UnknownChampion(champion_id.to_string()),
            other => other,
        })?;
        DetailResponse::decode(&body, champion_id)
    }
}

fn is_timeout_kind(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    let io_timeout = std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map(|e| is_timeout_kind(e.kind()))
        .unwrap_or(false);
    io_timeout || transport.to_string().contains("timed out")
}
