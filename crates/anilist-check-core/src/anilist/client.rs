use crate::anilist::api;
use crate::error::FetchError;
use crate::traits::{Transport, TransportResponse};
use anilist_check_config::{Config, ListNames};
use anilist_check_models::ListCollection;
use reqwest::blocking::Client;
use tracing::{debug, error};

/// Blocking HTTP transport. One POST per call, no retries, reqwest's default timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<TransportResponse, FetchError> {
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| FetchError::Transport(format!("failed to read response body: {}", e)))?;

        Ok(TransportResponse { status, body })
    }
}

/// Fetches a user's watching, paused and planning lists from AniList
pub struct AnilistClient<T = HttpTransport> {
    transport: T,
    endpoint: String,
    list_names: ListNames,
}

impl AnilistClient<HttpTransport> {
    pub fn from_config(config: &Config) -> Self {
        Self::with_transport(HttpTransport::new(&config.anilist.user_agent), config)
    }
}

impl Default for AnilistClient<HttpTransport> {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl<T: Transport> AnilistClient<T> {
    pub fn with_transport(transport: T, config: &Config) -> Self {
        Self {
            transport,
            endpoint: config.anilist.endpoint.clone(),
            list_names: config.lists.clone(),
        }
    }

    pub fn fetch_lists(&self, user: &str) -> Result<ListCollection, FetchError> {
        debug!(user, endpoint = %self.endpoint, "Fetching AniList lists");

        let request = api::build_request(user);
        let response = self.transport.post_json(&self.endpoint, &request).map_err(|e| {
            error!("Unable to reach AniList while fetching {}'s lists: {}", user, e);
            e
        })?;

        if !response.is_success() {
            error!(
                status = response.status,
                "AniList returned a bad status code when attempting to get {}'s lists", user
            );
            return Err(FetchError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let lists = api::parse_response(&response.body, &self.list_names).map_err(|e| {
            match &e {
                FetchError::Parse(_) => error!("AniList returned a response that was not parseable into JSON"),
                _ => error!("AniList response for {} could not be processed: {}", user, e),
            }
            e
        })?;

        debug!(
            user,
            watching = lists.watching.len(),
            paused = lists.paused.len(),
            planning = lists.plan_to_watch.len(),
            "Fetched AniList lists"
        );

        Ok(lists)
    }
}
