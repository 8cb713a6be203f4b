// Adapters layer: 外部系統的具體實作 (目前只有 Google Maps Platform)

pub mod google;

pub use google::{GoogleMapsClient, DEFAULT_BASE_URL};
