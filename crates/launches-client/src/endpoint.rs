//! Launch API endpoint construction

use launches_core::prelude::*;
use url::Url;

/// v3 launches collection
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v3/launches";

/// Year filter applied to the launches query
pub const DEFAULT_LAUNCH_YEAR: u16 = 2020;

const YEAR_QUERY_KEY: &str = "launch_year";

/// The one resource the application reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEndpoint {
    base: Url,
    launch_year: u16,
}

impl Default for LaunchEndpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL"),
            launch_year: DEFAULT_LAUNCH_YEAR,
        }
    }
}

impl LaunchEndpoint {
    /// Build an endpoint from a base URL and year filter.
    ///
    /// The base must be an absolute `http` or `https` URL. Any query string
    /// already present on it is kept; `launch_year` is replaced.
    pub fn new(base_url: &str, launch_year: u16) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| Error::endpoint(format!("{base_url}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::endpoint(format!(
                "{base_url}: unsupported scheme '{}'",
                base.scheme()
            )));
        }

        Ok(Self { base, launch_year })
    }

    /// Full request URL with the year filter embedded in the query
    pub fn url(&self) -> Url {
        let mut url = self.base.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != YEAR_QUERY_KEY)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(YEAR_QUERY_KEY, &self.launch_year.to_string());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_matches_public_endpoint() {
        let endpoint = LaunchEndpoint::default();
        assert_eq!(
            endpoint.url().as_str(),
            "https://api.spacexdata.com/v3/launches?launch_year=2020"
        );
    }

    #[test]
    fn test_custom_year() {
        let endpoint = LaunchEndpoint::new(DEFAULT_BASE_URL, 2019).unwrap();
        assert!(endpoint.url().as_str().ends_with("launch_year=2019"));
    }

    #[test]
    fn test_existing_query_is_kept_and_year_replaced() {
        let endpoint =
            LaunchEndpoint::new("http://localhost:8080/launches?limit=5&launch_year=1999", 2020)
                .unwrap();
        assert_eq!(
            endpoint.url().as_str(),
            "http://localhost:8080/launches?limit=5&launch_year=2020"
        );
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = LaunchEndpoint::new("/v3/launches", 2020).unwrap_err();
        assert!(matches!(err, Error::Endpoint { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = LaunchEndpoint::new("ftp://example.com/launches", 2020).unwrap_err();
        assert!(matches!(err, Error::Endpoint { .. }));
        assert!(err.to_string().contains("ftp"));
    }
}
