use crate::error::{ClimateError, Result};
use crate::models::{Location, RequestWindow};
use crate::utils::constants::POWER_FORMAT;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Something that answers a point-data request URL with the response body
#[allow(async_fn_in_trait)]
pub trait PointSource {
    /// Non-2xx answers must come back as [`ClimateError::HttpStatus`] carrying the body,
    /// transport failures as [`ClimateError::Network`].
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// HTTP client for the NASA POWER daily point endpoint
pub struct PowerClient {
    client: Client,
}

impl PowerClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClimateError::Network {
                url: String::new(),
                source: e,
            })?;

        Ok(Self { client })
    }
}

impl PointSource for PowerClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClimateError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ClimateError::Network {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ClimateError::HttpStatus { status, body });
        }

        Ok(body)
    }
}

/// Build the request URL for one location
///
/// Coordinates are rounded to two decimals to match the provider's point lookup.
pub fn build_request_url(
    base_url: &str,
    location: &Location,
    window: &RequestWindow,
) -> Result<String> {
    let (latitude, longitude) = location.rounded();

    let url = Url::parse_with_params(
        base_url,
        &[
            ("parameters", window.parameter_list()),
            ("community", window.community.clone()),
            ("longitude", longitude.to_string()),
            ("latitude", latitude.to_string()),
            ("start", window.start_date.clone()),
            ("end", window.end_date.clone()),
            ("format", POWER_FORMAT.to_string()),
        ],
    )
    .map_err(|e| ClimateError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::POWER_BASE_URL;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_build_request_url() {
        let location = Location::new("Lima_Metropolitana", -12.0464, -77.0428);
        let url = build_request_url(POWER_BASE_URL, &location, &RequestWindow::default()).unwrap();

        assert!(url.starts_with("https://power.larc.nasa.gov/api/temporal/daily/point?"));
        assert!(url.contains(
            "parameters=T2M_MAX%2CT2M_MIN%2CPRECTOT%2CRH2M%2CWS10M%2CALLSKY_SFC_SW_DWN"
        ));
        assert!(url.contains("&community=AG"));
        assert!(url.contains("&longitude=-77.04&latitude=-12.05"));
        assert!(url.contains("&start=20231001&end=20241001"));
        assert!(url.ends_with("&format=CSV"));
    }

    #[test]
    fn test_build_request_url_rejects_bad_base() {
        let location = Location::new("Ica", -14.0678, -75.7286);
        assert!(build_request_url("not a url", &location, &RequestWindow::default()).is_err());
    }

    /// Answer one request with a fixed status line and body, returning the URL to hit
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\n\
                 Content-Type: text/plain\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/api/temporal/daily/point?format=CSV", addr)
    }

    fn client() -> PowerClient {
        PowerClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_body() -> Result<()> {
        let url = serve_once("200 OK", "YEAR,DOY,T2M_MAX\n2023,274,21.3\n").await;
        let body = client().fetch_text(&url).await?;
        assert_eq!(body, "YEAR,DOY,T2M_MAX\n2023,274,21.3\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let url = serve_once(
            "422 Unprocessable Entity",
            "{\"messages\": [\"latitude out of range\"]}",
        )
        .await;

        match client().fetch_text(&url).await {
            Err(ClimateError::HttpStatus { status, body }) => {
                assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
                assert!(body.contains("latitude out of range"));
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_closed_port_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/api/temporal/daily/point", addr);
        match client().fetch_text(&url).await {
            Err(ClimateError::Network { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected Network, got {:?}", other),
        }
    }
}
