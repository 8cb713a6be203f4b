use crate::core::collector::PlacesCollector;
use crate::core::records::build_records;
use crate::core::{export, map};
use crate::domain::model::{SearchArea, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, PlacesProvider, Storage};
use crate::utils::error::{PlacesError, Result};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const CSV_FILE: &str = "places.csv";
pub const JSON_FILE: &str = "places.json";
pub const MAP_FILE: &str = "map.html";
pub const ZIP_FILE: &str = "nearby_places.zip";

/// 地址 → 座標 → 周邊地點 → 營業時間摘要 → 匯出檔案
pub struct PlacesPipeline<S: Storage, P: PlacesProvider, C: ConfigProvider> {
    storage: S,
    provider: P,
    config: C,
}

impl<S: Storage, P: PlacesProvider, C: ConfigProvider> PlacesPipeline<S, P, C> {
    pub fn new(storage: S, provider: P, config: C) -> Self {
        Self {
            storage,
            provider,
            config,
        }
    }

    fn bundle(&self, result: &TransformResult) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        zip.start_file(CSV_FILE, options)?;
        zip.write_all(&result.csv_output)?;

        zip.start_file(JSON_FILE, options)?;
        zip.write_all(result.json_output.as_bytes())?;

        zip.start_file(MAP_FILE, options)?;
        zip.write_all(result.map_html.as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, P: PlacesProvider, C: ConfigProvider> Pipeline for PlacesPipeline<S, P, C> {
    async fn extract(&self) -> Result<SearchArea> {
        let address = self.config.address();
        tracing::info!("🗺️ Geocoding address: {}", address);

        let center = self
            .provider
            .geocode(address)
            .await?
            .ok_or_else(|| PlacesError::UnresolvedAddress {
                address: address.to_string(),
            })?;
        tracing::info!("📌 Resolved to lat={}, lng={}", center.lat, center.lng);

        let candidates = PlacesCollector::new(&self.provider)
            .with_page_delay(self.config.page_delay())
            .collect(center, self.config.categories(), self.config.radius_m())
            .await?;

        Ok(SearchArea { center, candidates })
    }

    async fn transform(&self, area: SearchArea) -> Result<TransformResult> {
        let locale = self.config.locale();
        tracing::info!(
            "🔧 Looking up opening hours for {} places",
            area.candidates.len()
        );

        let records = build_records(
            &self.provider,
            area.candidates,
            locale,
            self.config.detail_delay(),
        )
        .await?;

        let csv_output = export::to_csv(&records, locale)?;
        let json_output = export::to_json(
            area.center,
            self.config.radius_m(),
            self.config.categories(),
            &records,
        )?;
        let map_html = map::render_map(area.center, &records, locale)?;

        Ok(TransformResult {
            center: area.center,
            records,
            csv_output,
            json_output,
            map_html,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let base = self.config.output_path().trim_end_matches('/');

        if self.config.compress_output() {
            let zip_data = self.bundle(&result)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(ZIP_FILE, &zip_data).await?;
            let output_path = format!("{}/{}", base, ZIP_FILE);
            tracing::info!("📦 Output saved: {}", output_path);
            return Ok(output_path);
        }

        self.storage.write_file(CSV_FILE, &result.csv_output).await?;
        self.storage
            .write_file(JSON_FILE, result.json_output.as_bytes())
            .await?;
        self.storage
            .write_file(MAP_FILE, result.map_html.as_bytes())
            .await?;

        tracing::info!("💾 Wrote {}, {} and {} to {}", CSV_FILE, JSON_FILE, MAP_FILE, base);
        Ok(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collector::tests::{candidate, ScriptedProvider};
    use crate::core::export::UTF8_BOM;
    use crate::domain::category::Category;
    use crate::domain::model::{Coordinate, NearbyPage};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        categories: Vec<Category>,
        language: String,
        compress: bool,
    }

    impl MockConfig {
        fn new(categories: Vec<Category>) -> Self {
            Self {
                categories,
                language: "en".to_string(),
                compress: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn address(&self) -> &str {
            "1-1 Marunouchi, Chiyoda, Tokyo"
        }

        fn categories(&self) -> &[Category] {
            &self.categories
        }

        fn radius_m(&self) -> u32 {
            500
        }

        fn language(&self) -> &str {
            &self.language
        }

        fn output_path(&self) -> &str {
            "test_output/"
        }

        fn page_delay(&self) -> Duration {
            Duration::ZERO
        }

        fn detail_delay(&self) -> Duration {
            Duration::ZERO
        }

        fn compress_output(&self) -> bool {
            self.compress
        }
    }

    /// 地址無法解析的 Provider
    struct NowhereProvider;

    #[async_trait]
    impl PlacesProvider for NowhereProvider {
        async fn geocode(&self, _address: &str) -> Result<Option<Coordinate>> {
            Ok(None)
        }

        async fn nearby(
            &self,
            _center: Coordinate,
            _radius_m: u32,
            _category: Category,
            _page_token: Option<&str>,
        ) -> Result<NearbyPage> {
            unreachable!("nearby must not be called for an unresolved address")
        }

        async fn details(&self, _place_id: &str) -> Result<Vec<String>> {
            unreachable!("details must not be called for an unresolved address")
        }
    }

    fn cafe_provider() -> ScriptedProvider {
        let mut provider = ScriptedProvider::default().with_pages(
            Category::Cafe,
            vec![vec![candidate("a", Category::Cafe), candidate("b", Category::Cafe)]],
        );
        provider.hours.insert(
            "a".to_string(),
            vec![
                "Monday: 7:00 AM – 7:00 PM".to_string(),
                "Saturday: Closed".to_string(),
            ],
        );
        provider
    }

    #[tokio::test]
    async fn test_extract_unresolved_address() {
        let pipeline = PlacesPipeline::new(
            MockStorage::new(),
            NowhereProvider,
            MockConfig::new(vec![Category::Cafe]),
        );

        let result = pipeline.extract().await;

        assert!(matches!(result, Err(PlacesError::UnresolvedAddress { .. })));
    }

    #[tokio::test]
    async fn test_extract_and_transform() {
        let pipeline = PlacesPipeline::new(
            MockStorage::new(),
            cafe_provider(),
            MockConfig::new(vec![Category::Cafe]),
        );

        let area = pipeline.extract().await.unwrap();
        assert_eq!(area.center, Coordinate::new(35.0, 139.0));
        assert_eq!(area.candidates.len(), 2);

        let result = pipeline.transform(area).await.unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].number, 1);
        assert_eq!(result.records[0].weekday_hours, "7:00 AM – 7:00 PM");
        assert_eq!(result.records[0].closed_days, "Saturday");
        assert_eq!(result.records[1].number, 2);
        assert_eq!(result.records[1].weekday_hours, "no information");
        assert!(result.csv_output.starts_with(UTF8_BOM));
        assert!(result.map_html.contains("Search center"));
    }

    #[tokio::test]
    async fn test_load_writes_separate_files() {
        let storage = MockStorage::new();
        let pipeline = PlacesPipeline::new(
            storage.clone(),
            cafe_provider(),
            MockConfig::new(vec![Category::Cafe]),
        );

        let area = pipeline.extract().await.unwrap();
        let result = pipeline.transform(area).await.unwrap();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "test_output");
        assert!(storage.get_file(CSV_FILE).await.is_some());
        assert!(storage.get_file(JSON_FILE).await.is_some());
        assert!(storage.get_file(MAP_FILE).await.is_some());
        assert!(storage.get_file(ZIP_FILE).await.is_none());
    }

    #[tokio::test]
    async fn test_load_with_compression() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new(vec![Category::Cafe]);
        config.compress = true;
        let pipeline = PlacesPipeline::new(storage.clone(), cafe_provider(), config);

        let area = pipeline.extract().await.unwrap();
        let result = pipeline.transform(area).await.unwrap();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "test_output/nearby_places.zip");

        let zip_bytes = storage.get_file(ZIP_FILE).await.unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_bytes)).unwrap();
        let mut file_names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        file_names.sort();
        assert_eq!(file_names, vec!["map.html", "places.csv", "places.json"]);

        let mut csv_file = archive.by_name(CSV_FILE).unwrap();
        let mut content = Vec::new();
        std::io::Read::read_to_end(&mut csv_file, &mut content).unwrap();
        assert!(content.starts_with(UTF8_BOM));
    }
}
