use crate::error::FetchError;

/// Raw outcome of one POST: whatever status and body came back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to an endpoint and hands back the raw response.
///
/// Non-2xx statuses are not errors at this level; only failing to get any response is.
pub trait Transport {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<TransportResponse, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<TransportResponse, FetchError> {
        (**self).post_json(url, body)
    }
}
