use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    config::{Credentials, Settings},
    debug,
    error::ApiError,
    warning,
};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:83.0) Gecko/20100101 Firefox/83.0";

/// How `QobuzClient` reacts to 502 and 429 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait before retrying a 502.
    pub bad_gateway_delay: Duration,
    /// Longest `Retry-After` honored on a 429, in seconds.
    pub max_retry_after: u64,
    /// Requests sent per call, the first one included.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            bad_gateway_delay: Duration::from_secs(10),
            max_retry_after: 120,
            max_attempts: 5,
        }
    }
}

/// Authenticated handle on the Qobuz API.
///
/// Holds one `reqwest::Client` so connections are reused across the many
/// requests a discography or album needs. Pass it by reference to whatever
/// needs the API; there is no global session.
pub struct QobuzClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    retry: RetryPolicy,
}

impl QobuzClient {
    pub fn new(settings: &Settings, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            credentials,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The underlying HTTP client, for fetching file URLs outside the API.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn app_secret(&self) -> &str {
        &self.credentials.app_secret
    }

    /// Sends a GET to `endpoint` and decodes the JSON body.
    ///
    /// 502 responses are retried after the policy's delay. 429 responses are
    /// retried after their `Retry-After` delay when it is present and within
    /// the policy's limit; otherwise they fail with
    /// [`ApiError::RateLimited`]. No call sends more than
    /// `max_attempts` requests.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let can_retry = attempt < self.retry.max_attempts;

            let response = self
                .http
                .get(&url)
                .query(params)
                .header("User-Agent", USER_AGENT)
                .header("X-App-Id", &self.credentials.app_id)
                .header("X-User-Auth-Token", &self.credentials.user_auth_token)
                .send()
                .await?;

            match response.status() {
                StatusCode::BAD_GATEWAY if can_retry => {
                    debug!(
                        "{} returned 502, retrying ({}/{})",
                        endpoint, attempt, self.retry.max_attempts
                    );
                    sleep(self.retry.bad_gateway_delay).await;
                    continue; // retry
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let Some(retry_after) = response
                        .headers()
                        .get("retry-after")
                        .and_then(|value| value.to_str().ok())
                        .and_then(|value| value.trim().parse::<u64>().ok())
                    else {
                        warning!("Rate limited by {} without a retry delay.", endpoint);
                        return Err(ApiError::RateLimited(0));
                    };

                    if retry_after > self.retry.max_retry_after {
                        warning!(
                            "Retry after has reached an abnormal high of {} seconds.",
                            retry_after
                        );
                        return Err(ApiError::RateLimited(retry_after));
                    }
                    if !can_retry {
                        warning!("Still rate limited by {} after {} attempts.", endpoint, attempt);
                        return Err(ApiError::RateLimited(retry_after));
                    }
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                status if !status.is_success() => {
                    return Err(ApiError::Status {
                        endpoint: endpoint.to_string(),
                        status,
                    });
                }
                _ => return Ok(response.json::<T>().await?),
            }
        }
    }
}
