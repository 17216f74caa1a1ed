//! Distance Matrix geocoding client.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::geocoding::{
    errors::GeocodingError,
    models::{AddressComponent, Location},
};

/// Default Distance Matrix geocode endpoint.
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://api.distancematrix.ai/maps/api/geocode/json";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Configuration for the upstream geocoding API.
#[derive(Clone)]
pub struct GeocodingConfig {
    /// Geocode endpoint, queried with `address` and `key` parameters.
    pub base_url: String,

    /// API key sent as the `key` query parameter.
    pub api_key: String,
}

impl std::fmt::Debug for GeocodingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// HTTP client for Distance Matrix geocode lookups.
#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    config: GeocodingConfig,
    http: Client,
}

impl DistanceMatrixClient {
    #[must_use]
    pub fn new(config: GeocodingConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Look up a free-form address and return its first match.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::NoResults`] when nothing matches, and another
    /// [`GeocodingError`] on transport failure or an unusable response.
    pub async fn geocode(&self, address: &str) -> Result<Location, GeocodingError> {
        debug!(address, "querying geocoding API");

        let response: GeocodeResponse = self
            .http
            .get(&self.config.base_url)
            .query(&[("address", address), ("key", self.config.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        locate(response)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,

    #[serde(default, alias = "results")]
    result: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    address_components: Vec<AddressComponent>,

    #[serde(default)]
    formatted_address: String,

    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: Option<f64>,
    lng: Option<f64>,
}

fn locate(response: GeocodeResponse) -> Result<Location, GeocodingError> {
    match response.status.as_str() {
        STATUS_OK => {}
        STATUS_ZERO_RESULTS => return Err(GeocodingError::NoResults),
        status => {
            error!(status, "geocoding API returned an error status");

            return Err(GeocodingError::UnexpectedStatus(status.to_owned()));
        }
    }

    let Some(result) = response.result.into_iter().next() else {
        error!("geocoding API returned no results");

        return Err(GeocodingError::NoResults);
    };

    if result.address_components.is_empty() {
        return Err(GeocodingError::MissingData("address_components"));
    }

    let (Some(latitude), Some(longitude)) = result
        .geometry
        .and_then(|geometry| geometry.location)
        .map_or((None, None), |location| (location.lat, location.lng))
    else {
        return Err(GeocodingError::MissingData("geometry"));
    };

    Ok(Location {
        latitude,
        longitude,
        display_name: result.formatted_address,
        address: result.address_components,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    use super::*;

    /// Serve one HTTP response from a local listener, returning the client
    /// config pointing at it and a handle yielding the raw request head.
    async fn serve_once(status: &'static str, body: String) -> (GeocodingConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("failed to get addr");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("failed to accept");

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];

            while !head.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.expect("failed to read request");

                if read == 0 {
                    break;
                }

                head.extend_from_slice(&buf[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );

            socket
                .write_all(response.as_bytes())
                .await
                .expect("failed to write response");

            String::from_utf8_lossy(&head).into_owned()
        });

        let config = GeocodingConfig {
            base_url: format!("http://{addr}/geocode"),
            api_key: "secret-key".to_string(),
        };

        (config, handle)
    }

    fn parse(body: Value) -> Result<Location, GeocodingError> {
        locate(serde_json::from_value(body).expect("valid geocode response"))
    }

    fn paulista() -> Value {
        json!({
            "status": "OK",
            "result": [{
                "address_components": [
                    { "long_name": "1578", "short_name": "1578", "types": ["street_number"] },
                    { "long_name": "Avenida Paulista", "short_name": "Av. Paulista", "types": ["route"] }
                ],
                "formatted_address": "Av. Paulista, 1578 - Bela Vista, São Paulo - SP, Brazil",
                "geometry": { "location": { "lat": -23.5613, "lng": -46.6565 } }
            }]
        })
    }

    #[test]
    fn first_result_is_returned() {
        let location = parse(paulista()).expect("location");

        assert_eq!(location.latitude, -23.5613);
        assert_eq!(location.longitude, -46.6565);
        assert_eq!(
            location.display_name,
            "Av. Paulista, 1578 - Bela Vista, São Paulo - SP, Brazil"
        );
        assert_eq!(location.address.len(), 2);
        assert_eq!(location.address[1].short_name, "Av. Paulista");
    }

    #[tokio::test]
    async fn geocode_sends_address_and_key_as_query() {
        let (config, server) = serve_once("200 OK", paulista().to_string()).await;

        let location = DistanceMatrixClient::new(config)
            .geocode("Av. Paulista, 1578")
            .await
            .expect("location");

        let request = server.await.expect("server task");

        assert!(
            request.starts_with("GET /geocode?address=Av.+Paulista%2C+1578&key=secret-key HTTP/1.1"),
            "unexpected request: {request}"
        );
        assert_eq!(location.latitude, -23.5613);
    }

    #[tokio::test]
    async fn geocode_error_status_is_http_error() {
        let (config, server) = serve_once("503 Service Unavailable", String::new()).await;

        let result = DistanceMatrixClient::new(config).geocode("anywhere").await;

        server.await.expect("server task");

        assert!(
            matches!(
                result,
                Err(GeocodingError::Http(ref error))
                    if error.status() == Some(reqwest::StatusCode::SERVICE_UNAVAILABLE)
            ),
            "expected Http 503, got {result:?}"
        );
    }

    #[tokio::test]
    async fn geocode_zero_results_is_no_results() {
        let (config, server) =
            serve_once("200 OK", json!({ "status": "ZERO_RESULTS", "result": [] }).to_string()).await;

        let result = DistanceMatrixClient::new(config).geocode("nowhere").await;

        server.await.expect("server task");

        assert!(
            matches!(result, Err(GeocodingError::NoResults)),
            "expected NoResults, got {result:?}"
        );
    }

    #[test]
    fn results_key_is_accepted() {
        let mut body = paulista();
        let results = body["result"].take();

        body["results"] = results;
        body.as_object_mut().expect("object").remove("result");

        assert!(parse(body).is_ok());
    }

    #[test]
    fn error_status_is_unexpected() {
        let result = parse(json!({ "status": "REQUEST_DENIED" }));

        assert!(
            matches!(result, Err(GeocodingError::UnexpectedStatus(ref status)) if status == "REQUEST_DENIED"),
            "expected UnexpectedStatus, got {result:?}"
        );
    }

    #[test]
    fn empty_results_are_no_results() {
        for body in [
            json!({ "status": "OK", "result": [] }),
            json!({ "status": "ZERO_RESULTS" }),
        ] {
            let result = parse(body);

            assert!(
                matches!(result, Err(GeocodingError::NoResults)),
                "expected NoResults, got {result:?}"
            );
        }
    }

    #[test]
    fn missing_components_are_reported() {
        let mut body = paulista();

        body["result"][0]["address_components"] = json!([]);

        let result = parse(body);

        assert!(
            matches!(result, Err(GeocodingError::MissingData("address_components"))),
            "expected MissingData, got {result:?}"
        );
    }

    #[test]
    fn missing_coordinates_are_reported() {
        let mut body = paulista();

        body["result"][0]["geometry"]["location"] = json!({ "lat": -23.5 });

        let result = parse(body);

        assert!(
            matches!(result, Err(GeocodingError::MissingData("geometry"))),
            "expected MissingData, got {result:?}"
        );
    }
}
