//! Launch sources
//!
//! [`LaunchSource`] is the seam between the application and the outside
//! world. The TUI uses [`HttpLaunchSource`]; tests substitute the helpers in
//! `test_utils`.

use std::time::Duration;

use launches_core::prelude::*;
use launches_core::{parse_launches, Launch};

use crate::endpoint::LaunchEndpoint;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Something that can produce the launch list once
#[trait_variant::make(LaunchSource: Send)]
pub trait LocalLaunchSource {
    /// Fetch and validate the full launch list.
    ///
    /// Any failure (transport, HTTP status, malformed body) rejects the
    /// whole batch.
    async fn fetch_launches(&self) -> Result<Vec<Launch>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Reads launches from the public REST API
#[derive(Debug, Clone)]
pub struct HttpLaunchSource {
    client: reqwest::Client,
    endpoint: LaunchEndpoint,
}

impl HttpLaunchSource {
    pub fn new(endpoint: LaunchEndpoint, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("spacex-launches/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }
}

impl LaunchSource for HttpLaunchSource {
    async fn fetch_launches(&self) -> Result<Vec<Launch>> {
        let url = self.endpoint.url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("unreadable response body: {e}")))?;

        let launches = parse_launches(&body)?;
        info!("Fetched {} launches from {}", launches.len(), url);
        Ok(launches)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.endpoint.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> HttpLaunchSource {
        let endpoint = LaunchEndpoint::new(&format!("{}/v3/launches", server.uri()), 2020).unwrap();
        HttpLaunchSource::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    fn starlink_body() -> serde_json::Value {
        serde_json::json!([{
            "flight_number": 1,
            "mission_name": "Starlink 2",
            "launch_date_utc": "2020-01-07T02:19:00.000Z",
            "rocket": { "rocket_name": "Falcon 9", "rocket_type": "FT" },
            "details": "SpaceX's second operational batch of Starlink satellites."
        }])
    }

    #[tokio::test]
    async fn test_fetch_sends_year_filter_and_parses_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/launches"))
            .and(query_param("launch_year", "2020"))
            .respond_with(ResponseTemplate::new(200).set_body_json(starlink_body()))
            .expect(1)
            .mount(&server)
            .await;

        let launches = LaunchSource::fetch_launches(&source_for(&server)).await.unwrap();

        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].mission_name, "Starlink 2");
        assert_eq!(launches[0].rocket_name(), Some("Falcon 9"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = LaunchSource::fetch_launches(&source_for(&server)).await.unwrap_err();
        assert!(matches!(err, Error::Http { status: 503 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = LaunchSource::fetch_launches(&source_for(&server)).await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_schema_violation_rejects_batch() {
        let server = MockServer::start().await;
        let body = serde_json::json!([
            {
                "flight_number": 1,
                "mission_name": "ok",
                "launch_date_utc": "2020-01-01T00:00:00Z"
            },
            {
                "flight_number": "two",
                "mission_name": "bad",
                "launch_date_utc": "2020-01-02T00:00:00Z"
            }
        ]);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = LaunchSource::fetch_launches(&source_for(&server)).await.unwrap_err();
        assert!(matches!(err, Error::Validation { index: 1, .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let endpoint = LaunchEndpoint::new("http://127.0.0.1:9/v3/launches", 2020).unwrap();
        let source = HttpLaunchSource::new(endpoint, Duration::from_secs(2)).unwrap();

        let err = LaunchSource::fetch_launches(&source).await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[test]
    fn test_describe_includes_url() {
        let source = HttpLaunchSource::new(LaunchEndpoint::default(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            LaunchSource::describe(&source),
            "GET https://api.spacexdata.com/v3/launches?launch_year=2020"
        );
    }
}
