//! Blocking HTTP GET for media resources.
//!
//! One URL, one request, body buffered in memory; journal media is small
//! enough that streaming to disk buys nothing.

use std::fmt;
use std::time::Duration;

/// Error from a single media fetch (curl failure or non-2xx response).
#[derive(Debug)]
pub enum FetchError {
    /// curl reported an error (timeout, connection, TLS, etc.).
    Curl(curl::Error),
    /// Response completed with a non-2xx status.
    Http(u32),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

/// Fetches `url` with a single blocking GET and returns the response body.
pub fn fetch_url(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;
    easy.timeout(Duration::from_secs(600))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_refused_is_curl_error() {
        // Port 1 is never listening; fails without touching the network.
        let err = fetch_url("http://127.0.0.1:1/photo.jpg").unwrap_err();
        assert!(matches!(err, FetchError::Curl(_)));
    }

    #[test]
    fn display_formats_http_status() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP 404");
    }
}
