use crate::domain::category::Category;
use crate::domain::model::{Coordinate, PlaceCandidate};
use crate::domain::ports::PlacesProvider;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::time::Duration;

/// 換頁 token 發出後需要等待一段時間才會生效
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// 依類別逐一呼叫 Nearby Search 並依 place_id 去除重複
pub struct PlacesCollector<'a, P: PlacesProvider + ?Sized> {
    provider: &'a P,
    page_delay: Duration,
}

/// 單次收集的累積狀態，只屬於一次 `collect` 呼叫
#[derive(Default)]
struct Accumulator {
    seen: HashSet<String>,
    places: Vec<PlaceCandidate>,
}

impl Accumulator {
    fn extend(&mut self, candidates: Vec<PlaceCandidate>) -> usize {
        let before = self.places.len();
        for candidate in candidates {
            if self.seen.insert(candidate.place_id.clone()) {
                self.places.push(candidate);
            }
        }
        self.places.len() - before
    }
}

impl<'a, P: PlacesProvider + ?Sized> PlacesCollector<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    pub async fn collect(
        &self,
        center: Coordinate,
        categories: &[Category],
        radius_m: u32,
    ) -> Result<Vec<PlaceCandidate>> {
        let mut acc = Accumulator::default();

        // 類別依序處理：Provider 有全域速率限制，且去重需要看到先前所有結果
        for &category in categories {
            let mut page_token: Option<String> = None;
            let mut page = 1;

            loop {
                tracing::debug!("🔎 Nearby search: category={}, page={}", category, page);
                let response = self
                    .provider
                    .nearby(center, radius_m, category, page_token.as_deref())
                    .await?;

                let fetched = response.candidates.len();
                let added = acc.extend(response.candidates);
                tracing::debug!(
                    "📄 {} page {}: {} results, {} new",
                    category,
                    page,
                    fetched,
                    added
                );

                match response.next_page_token {
                    Some(token) => {
                        page_token = Some(token);
                        page += 1;
                        tokio::time::sleep(self.page_delay).await;
                    }
                    None => break,
                }
            }
        }

        tracing::info!(
            "📍 Collected {} unique places across {} categories",
            acc.places.len(),
            categories.len()
        );
        Ok(acc.places)
    }
}
