use reqwest::{Client, ClientBuilder};
use once_cell::sync::Lazy;
use serde_json::Value;
use crate::error::{AppError, Result};

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Calls the external prediction service at `{base_url}/predict/<url>`.
#[derive(Clone, Debug)]
pub struct PredictorClient {
    client: Client,
    base_url: String,
}

impl PredictorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: CLIENT.clone(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The upstream URL for `target`, with the target percent-encoded as one path segment.
    pub fn predict_url(&self, target: &str) -> String {
        format!("{}/predict/{}", self.base_url, urlencoding::encode(target))
    }

    /// Fetches the prediction for `target` and returns the upstream JSON untouched.
    ///
    /// Connection failures, non-2xx statuses and non-JSON bodies all come back as
    /// [`AppError::Upstream`].
    pub async fn predict(&self, target: &str) -> Result<Value> {
        let upstream = self.predict_url(target);
        tracing::debug!("forwarding to {upstream}");

        let response = self.client.get(&upstream).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("predictor answered {status}")));
        }

        let body: Value = response.json().await?;
        tracing::debug!("predictor answered {status}");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_encoded_as_a_single_segment() {
        let client = PredictorClient::new("http://localhost:5000");
        assert_eq!(
            client.predict_url("https://example.com/a b?q=1&r=2"),
            "http://localhost:5000/predict/https%3A%2F%2Fexample.com%2Fa%20b%3Fq%3D1%26r%3D2"
        );
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let client = PredictorClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.predict_url("a-b_c.d~e"),
            "http://localhost:5000/predict/a-b_c.d~e"
        );
    }

    #[tokio::test]
    async fn unreachable_predictor_is_an_upstream_error() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let client = PredictorClient::new("http://127.0.0.1:9");
        let err = client.predict("https://example.com").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
