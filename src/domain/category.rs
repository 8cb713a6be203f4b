use crate::utils::error::PlacesError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Nearby Search 支援的地點類別 (固定詞彙)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Restaurant,
    Cafe,
    Bar,
    ConvenienceStore,
    GasStation,
    Lodging,
    Bank,
    Hospital,
    Pharmacy,
    MovieTheater,
    Park,
    Library,
    ShoppingMall,
    Museum,
    TrainStation,
    BusStation,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Bar,
        Category::ConvenienceStore,
        Category::GasStation,
        Category::Lodging,
        Category::Bank,
        Category::Hospital,
        Category::Pharmacy,
        Category::MovieTheater,
        Category::Park,
        Category::Library,
        Category::ShoppingMall,
        Category::Museum,
        Category::TrainStation,
        Category::BusStation,
    ];

    /// Provider 的 `type` 參數值
    pub fn api_id(self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Bar => "bar",
            Category::ConvenienceStore => "convenience_store",
            Category::GasStation => "gas_station",
            Category::Lodging => "lodging",
            Category::Bank => "bank",
            Category::Hospital => "hospital",
            Category::Pharmacy => "pharmacy",
            Category::MovieTheater => "movie_theater",
            Category::Park => "park",
            Category::Library => "library",
            Category::ShoppingMall => "shopping_mall",
            Category::Museum => "museum",
            Category::TrainStation => "train_station",
            Category::BusStation => "bus_station",
        }
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            Category::Restaurant => "飲食店",
            Category::Cafe => "カフェ",
            Category::Bar => "バー",
            Category::ConvenienceStore => "コンビニ",
            Category::GasStation => "ガソリンスタンド",
            Category::Lodging => "ホテル",
            Category::Bank => "銀行",
            Category::Hospital => "病院",
            Category::Pharmacy => "薬局",
            Category::MovieTheater => "映画館",
            Category::Park => "公園",
            Category::Library => "図書館",
            Category::ShoppingMall => "ショッピングモール",
            Category::Museum => "美術館",
            Category::TrainStation => "駅",
            Category::BusStation => "バス停",
        }
    }
}

impl FromStr for Category {
    type Err = PlacesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.api_id() == s || c.label_ja() == s)
            .ok_or_else(|| PlacesError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_id_and_label() {
        assert_eq!("cafe".parse::<Category>().unwrap(), Category::Cafe);
        assert_eq!("銀行".parse::<Category>().unwrap(), Category::Bank);
        assert_eq!(
            "train_station".parse::<Category>().unwrap(),
            Category::TrainStation
        );
        assert!(matches!(
            "casino".parse::<Category>(),
            Err(PlacesError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_vocabulary_is_closed_and_unique() {
        let ids: std::collections::HashSet<_> = Category::ALL.iter().map(|c| c.api_id()).collect();
        assert_eq!(ids.len(), 16);
        assert_eq!(Category::default(), Category::Restaurant);
    }

    #[test]
    fn test_serde_uses_api_ids() {
        let json = serde_json::to_string(&Category::ConvenienceStore).unwrap();
        assert_eq!(json, "\"convenience_store\"");
    }
}
