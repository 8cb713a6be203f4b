//! Google Maps Platform (Geocoding / Places Nearby Search / Place Details) 的 HTTP 實作。
//!
//! 回應中的巢狀欄位全部以 `Option` 建模，缺少的欄位在反序列化時就會顯現，
//! 不需要在取值時逐層檢查。

use crate::domain::category::Category;
use crate::domain::model::{Coordinate, NearbyPage, PlaceCandidate};
use crate::domain::ports::PlacesProvider;
use crate::utils::error::{PlacesError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

const GEOCODE_PATH: &str = "/geocode/json";
const NEARBY_PATH: &str = "/place/nearbysearch/json";
const DETAILS_PATH: &str = "/place/details/json";

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<LatLng>,
}

impl Geometry {
    fn coordinate(&self) -> Option<Coordinate> {
        self.location
            .as_ref()
            .map(|loc| Coordinate::new(loc.lat, loc.lng))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<NearbyResult>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: Option<String>,
    name: Option<String>,
    vicinity: Option<String>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    error_message: Option<String>,
    result: Option<DetailsResult>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    weekday_text: Option<Vec<String>>,
}

fn check_status(status: &str, error_message: Option<String>) -> Result<()> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(PlacesError::provider(
            other,
            error_message.unwrap_or_else(|| "no error message".to_string()),
        )),
    }
}

impl NearbyResult {
    fn into_candidate(self, category: Category) -> Option<PlaceCandidate> {
        let location = self.geometry.as_ref().and_then(Geometry::coordinate)?;
        Some(PlaceCandidate {
            place_id: self.place_id?,
            name: self.name.unwrap_or_default(),
            vicinity: self.vicinity.unwrap_or_default(),
            location,
            category,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl GoogleMapsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            language: "ja".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl PlacesProvider for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>> {
        let response: GeocodeResponse = self
            .get_json(
                GEOCODE_PATH,
                &[("address", address), ("language", self.language.as_str())],
            )
            .await?;
        check_status(&response.status, response.error_message)?;

        Ok(response
            .results
            .into_iter()
            .next()
            .and_then(|r| r.geometry)
            .and_then(|g| g.coordinate()))
    }

    async fn nearby(
        &self,
        center: Coordinate,
        radius_m: u32,
        category: Category,
        page_token: Option<&str>,
    ) -> Result<NearbyPage> {
        // pagetoken 指定時其他參數會被忽略
        let response: NearbyResponse = match page_token {
            Some(token) => self.get_json(NEARBY_PATH, &[("pagetoken", token)]).await?,
            None => {
                let location = center.to_query_value();
                let radius = radius_m.to_string();
                self.get_json(
                    NEARBY_PATH,
                    &[
                        ("location", location.as_str()),
                        ("radius", radius.as_str()),
                        ("type", category.api_id()),
                        ("language", self.language.as_str()),
                    ],
                )
                .await?
            }
        };
        check_status(&response.status, response.error_message)?;

        let mut candidates = Vec::with_capacity(response.results.len());
        for result in response.results {
            let name = result.name.clone().unwrap_or_default();
            match result.into_candidate(category) {
                Some(candidate) => candidates.push(candidate),
                None => tracing::debug!("Skipping result without place_id or location: {:?}", name),
            }
        }

        Ok(NearbyPage {
            candidates,
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    async fn details(&self, place_id: &str) -> Result<Vec<String>> {
        let response: DetailsResponse = self
            .get_json(
                DETAILS_PATH,
                &[
                    ("place_id", place_id),
                    ("fields", "opening_hours"),
                    ("language", self.language.as_str()),
                ],
            )
            .await?;
        check_status(&response.status, response.error_message)?;

        Ok(response
            .result
            .and_then(|r| r.opening_hours)
            .and_then(|h| h.weekday_text)
            .unwrap_or_default())
    }
}
