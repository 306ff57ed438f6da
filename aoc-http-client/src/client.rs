//! AOC HTTP client implementation

use crate::error::AocError;
use reqwest::StatusCode;
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

/// User agent sent with every request
const USER_AGENT: &str = concat!("aoctools/", env!("CARGO_PKG_VERSION"));

/// Raw outcome of an input request
///
/// The body is only present for 2xx responses; the status is always kept so
/// callers can report exactly what the server said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputResponse {
    /// HTTP status returned by the server
    pub status: StatusCode,
    /// Response body, `Some` only when `status` is a success
    pub body: Option<String>,
}

impl InputResponse {
    /// Whether the status lies in the half-open range 200..300
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// The main AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let response = client.fetch_input(2024, 1, session)?;
/// if let Some(input) = response.body {
///     println!("Input: {}", input);
/// } else {
///     println!("Server answered {}", response.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Create a new AOC client with the default rustls-tls configuration
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The base URL requests are made against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a secure cookie header value from a session string
    ///
    /// This function creates a HeaderValue with the sensitive flag set to true
    /// and zeroizes the temporary string after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut sensitive_header = header_value
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()))?;
        sensitive_header.set_sensitive(true);

        Ok(sensitive_header)
    }

    /// Build `{base}/{year}/day/{day}/input`
    fn input_url(&self, year: u16, day: u8) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "input"]);
        Ok(url)
    }

    /// Request the personalized puzzle input for a specific year and day
    ///
    /// Issues exactly one GET. Unlike most client calls, a non-success status
    /// is not an error: it is returned in [`InputResponse::status`] with no
    /// body, and the caller decides what to do with it.
    ///
    /// # Arguments
    ///
    /// * `year` - The AOC year (e.g., 2024)
    /// * `day` - The day number (1-31)
    /// * `session` - The session cookie value (without "session=" prefix)
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network or transport error, including a body
    ///   that cannot be read; invalid UTF-8 is decoded lossily
    pub fn fetch_input(&self, year: u16, day: u8, session: &str) -> Result<InputResponse, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.input_url(year, day)?;

        tracing::debug!(%url, "requesting puzzle input");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::COOKIE, cookie_header)
            .send()?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "input request finished");

        if !status.is_success() {
            return Ok(InputResponse { status, body: None });
        }

        let body = response.text()?;
        Ok(InputResponse {
            status,
            body: Some(body),
        })
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// This is useful for testing with mock servers. The URL is parsed and
    /// validated at builder time, catching errors early.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, etc.)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized
    /// or the default base URL cannot be parsed.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse("https://adventofcode.com")
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self.client_builder.unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .use_rustls_tls()
                .user_agent(USER_AGENT)
        });

        let client = builder
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    // **Feature: aoc-http-client, Property 1: Base URL configuration**
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_base_url_configuration(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
        ) {
            let base_url = format!("{}://{}:{}", scheme, host, port);

            let client = AocClient::builder()
                .base_url(&base_url)
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(client.base_url().scheme(), scheme);
            prop_assert_eq!(client.base_url().host_str(), Some(host.as_str()));
            prop_assert_eq!(client.base_url().port(), Some(port));
        }
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::builder().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_custom_client_builder() {
        let custom_builder = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .use_rustls_tls();

        let result = AocClient::builder().client_builder(custom_builder).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AocClient::builder().base_url("not a valid url");
        assert!(result.is_err());
    }

    #[test]
    fn test_cookie_header_is_sensitive() {
        let header = AocClient::create_cookie_header("abc123").unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "session=abc123");
    }

    #[test]
    fn test_cookie_header_rejects_control_characters() {
        let result = AocClient::create_cookie_header("bad\nvalue");
        assert!(matches!(result, Err(AocError::ClientInit(_))));
    }

    // **Feature: aoc-http-client, Property 2: Input URL construction**
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_url_construction(
            year in 2015u16..2035u16,
            day in 1u8..=31u8,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server.mock("GET", expected_path.as_str())
                .match_header("cookie", format!("session={}", session).as_str())
                .with_status(200)
                .with_body("test input data")
                .expect(1)
                .create();

            let client = AocClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();

            let result = client.fetch_input(year, day, &session);

            prop_assert!(result.is_ok(), "fetch_input failed for {} day {}", year, day);
            mock.assert();

            let response = result.unwrap();
            prop_assert_eq!(response.status, StatusCode::OK);
            prop_assert_eq!(response.body.as_deref(), Some("test input data"));
        }
    }

    // **Feature: aoc-http-client, Property 3: Success statuses carry the body**
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_success_status_keeps_body(
            status_code in prop::sample::select(vec![200usize, 201, 202, 203, 206, 299]),
            body in "[ -~\n]{0,64}",
        ) {
            let mut server = mockito::Server::new();
            let mock = server.mock("GET", "/2020/day/5/input")
                .with_status(status_code)
                .with_body(&body)
                .expect(1)
                .create();

            let client = AocClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();

            let response = client.fetch_input(2020, 5, "s").unwrap();

            prop_assert!(response.is_success());
            prop_assert_eq!(response.status.as_u16() as usize, status_code);
            prop_assert_eq!(response.body, Some(body));
            mock.assert();
        }
    }

    // **Feature: aoc-http-client, Property 4: Non-success status is reported, not raised**
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_non_success_status_reported(
            status_code in prop::sample::select(vec![300usize, 400, 401, 403, 404, 429, 500, 502, 503, 504]),
        ) {
            let mut server = mockito::Server::new();
            let mock = server.mock("GET", "/2022/day/12/input")
                .with_status(status_code)
                .with_body("Please don't repeatedly request this endpoint")
                .expect(1)
                .create();

            let client = AocClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();

            let response = client.fetch_input(2022, 12, "s").unwrap();

            prop_assert!(!response.is_success());
            prop_assert_eq!(response.status.as_u16() as usize, status_code);
            prop_assert!(response.body.is_none());
            mock.assert();
        }
    }

    #[test]
    fn test_invalid_utf8_body_is_decoded_lossily() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/2020/day/9/input")
            .with_status(200)
            .with_body([b'4', b'2', 0xff, b'\n'])
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let response = client.fetch_input(2020, 9, "s").unwrap();
        assert_eq!(response.body.as_deref(), Some("42\u{fffd}\n"));
    }
}
