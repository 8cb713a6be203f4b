use crate::domain::category::Category;
use crate::domain::locale::HoursLocale;
use crate::domain::model::{Coordinate, PlaceRecord};
use crate::utils::error::{PlacesError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Excel 等工具需要 BOM 才能正確辨識 UTF-8
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn to_csv(records: &[PlaceRecord], locale: &HoursLocale) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(locale.columns)?;
    for record in records {
        writer.write_record(record.table_row())?;
    }
    writer
        .into_inner()
        .map_err(|e| PlacesError::ProcessingError {
            message: format!("Failed to flush CSV output: {}", e),
        })
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    generated_at: DateTime<Utc>,
    center: Coordinate,
    radius_m: u32,
    categories: &'a [Category],
    places: &'a [PlaceRecord],
}

pub fn to_json(
    center: Coordinate,
    radius_m: u32,
    categories: &[Category],
    records: &[PlaceRecord],
) -> Result<String> {
    let report = SearchReport {
        generated_at: Utc::now(),
        center,
        radius_m,
        categories,
        places: records,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// 終端機顯示用，一筆一行
pub fn to_table(records: &[PlaceRecord], locale: &HoursLocale) -> String {
    let mut lines = vec![locale.columns.join(" | ")];
    lines.extend(records.iter().map(|r| r.table_row().join(" | ")));
    lines.join("\n")
}
