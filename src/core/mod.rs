pub mod collector;
pub mod engine;
pub mod export;
pub mod hours;
pub mod map;
pub mod pipeline;
pub mod records;

pub use crate::domain::model::{
    Coordinate, PlaceCandidate, PlaceRecord, RunOutcome, SearchArea, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, PlacesProvider, Storage};
pub use crate::utils::error::Result;
