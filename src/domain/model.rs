use crate::domain::category::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Nearby Search 的 `location` 參數格式
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Provider 回傳的單一地點
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: String,
    pub vicinity: String,
    pub location: Coordinate,
    pub category: Category,
}

/// 一次 Nearby Search 的回應頁
#[derive(Debug, Clone, Default)]
pub struct NearbyPage {
    pub candidates: Vec<PlaceCandidate>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSummary {
    pub weekday: String,
    pub weekend: String,
    pub closed_days: String,
}

/// 顯示與匯出用的最終資料列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub number: usize,
    pub name: String,
    pub address: String,
    pub weekday_hours: String,
    pub weekend_hours: String,
    pub closed_days: String,
    pub location: Coordinate,
}

impl PlaceRecord {
    pub fn new(number: usize, candidate: PlaceCandidate, hours: HoursSummary) -> Self {
        Self {
            number,
            name: candidate.name,
            address: candidate.vicinity,
            weekday_hours: hours.weekday,
            weekend_hours: hours.weekend,
            closed_days: hours.closed_days,
            location: candidate.location,
        }
    }

    /// 表格與 CSV 欄位 (不含座標)
    pub fn table_row(&self) -> [String; 6] {
        [
            self.number.to_string(),
            self.name.clone(),
            self.address.clone(),
            self.weekday_hours.clone(),
            self.weekend_hours.clone(),
            self.closed_days.clone(),
        ]
    }
}

/// extract 階段的輸出：搜尋中心與收集到的候選地點
#[derive(Debug, Clone)]
pub struct SearchArea {
    pub center: Coordinate,
    pub candidates: Vec<PlaceCandidate>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub center: Coordinate,
    pub records: Vec<PlaceRecord>,
    pub csv_output: Vec<u8>,
    pub json_output: String,
    pub map_html: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed {
        output_path: String,
        records: Vec<PlaceRecord>,
    },
    /// 所有類別都沒有結果，屬於警告而非錯誤
    NothingFound { center: Coordinate },
}
