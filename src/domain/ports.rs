use crate::domain::category::Category;
use crate::domain::locale::HoursLocale;
use crate::domain::model::{Coordinate, NearbyPage, SearchArea, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn address(&self) -> &str;
    fn categories(&self) -> &[Category];
    fn radius_m(&self) -> u32;
    fn language(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_delay(&self) -> Duration;
    fn detail_delay(&self) -> Duration;
    fn compress_output(&self) -> bool;

    fn locale(&self) -> &'static HoursLocale {
        HoursLocale::for_language(self.language()).unwrap_or(&HoursLocale::JAPANESE)
    }
}

/// 地圖資料供應者的三種能力：地理編碼、周邊搜尋、營業時間查詢
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// 找不到地址時回傳 `None`
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>>;

    async fn nearby(
        &self,
        center: Coordinate,
        radius_m: u32,
        category: Category,
        page_token: Option<&str>,
    ) -> Result<NearbyPage>;

    /// `weekday_text` 形式的每日營業時間，沒有資料時為空
    async fn details(&self, place_id: &str) -> Result<Vec<String>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SearchArea>;
    async fn transform(&self, area: SearchArea) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
