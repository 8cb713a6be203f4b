pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use adapters::GoogleMapsClient;
pub use self::core::{engine::SearchEngine, pipeline::PlacesPipeline};
pub use domain::category::Category;
pub use domain::locale::HoursLocale;
pub use domain::model::{Coordinate, PlaceCandidate, PlaceRecord, RunOutcome};
pub use utils::error::{PlacesError, Result};
