use crate::core::hours::summarize;
use crate::domain::locale::HoursLocale;
use crate::domain::model::{PlaceCandidate, PlaceRecord};
use crate::domain::ports::PlacesProvider;
use crate::utils::error::Result;
use std::time::Duration;

pub const DEFAULT_DETAIL_DELAY: Duration = Duration::from_millis(100);

/// 逐一查詢營業時間並組成編號連續 (從 1 開始) 的資料列，保留 Provider 的順序
pub async fn build_records<P: PlacesProvider + ?Sized>(
    provider: &P,
    candidates: Vec<PlaceCandidate>,
    locale: &HoursLocale,
    detail_delay: Duration,
) -> Result<Vec<PlaceRecord>> {
    let total = candidates.len();
    let mut records = Vec::with_capacity(total);

    for (index, candidate) in candidates.into_iter().enumerate() {
        let schedule = provider.details(&candidate.place_id).await?;
        tracing::debug!(
            "🕘 {}/{} {}: {} schedule lines",
            index + 1,
            total,
            candidate.name,
            schedule.len()
        );
        tokio::time::sleep(detail_delay).await;

        let hours = summarize(&schedule, locale);
        records.push(PlaceRecord::new(index + 1, candidate, hours));
    }

    Ok(records)
}
