use crate::domain::locale::{DayGroup, HoursLocale};
use crate::domain::model::HoursSummary;

const LABEL_SEPARATOR: &str = ": ";

/// 將 `"月曜日: 9時00分～17時00分"` 形式的每日營業時間壓縮成平日/假日摘要。
///
/// 每一組 (平日、假日) 蒐集不重複的營業時間描述：
/// 沒有描述時為「無資料」，只有一種時原樣輸出，超過一種時為「依星期而異」。
/// 公休日依出現順序以 `", "` 串接，沒有時為「無」。
/// 格式不符或不在星期詞彙內的行只記錄 debug 日誌，不會回傳錯誤。
pub fn summarize<S: AsRef<str>>(lines: &[S], locale: &HoursLocale) -> HoursSummary {
    let mut weekday_hours: Vec<&str> = Vec::new();
    let mut weekend_hours: Vec<&str> = Vec::new();
    let mut closed_days: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let Some((label, hours)) = line.split_once(LABEL_SEPARATOR) else {
            tracing::debug!("Skipping schedule line without separator: {:?}", line);
            continue;
        };

        // 公休日先於分組判斷，與 Provider 原始順序一致
        if hours == locale.closed {
            closed_days.push(label);
            continue;
        }

        let bucket = match locale.classify(label) {
            Some(DayGroup::Weekday) => &mut weekday_hours,
            Some(DayGroup::Weekend) => &mut weekend_hours,
            None => {
                tracing::debug!("Skipping schedule line with unknown day label: {:?}", label);
                continue;
            }
        };
        if !bucket.contains(&hours) {
            bucket.push(hours);
        }
    }

    HoursSummary {
        weekday: reduce_group(&weekday_hours, locale),
        weekend: reduce_group(&weekend_hours, locale),
        closed_days: if closed_days.is_empty() {
            locale.no_closed_days.to_string()
        } else {
            closed_days.join(", ")
        },
    }
}

fn reduce_group(distinct: &[&str], locale: &HoursLocale) -> String {
    match distinct {
        [] => locale.no_information.to_string(),
        [only] => (*only).to_string(),
        _ => locale.varies_by_day.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &HoursLocale = &HoursLocale::ENGLISH;

    #[test]
    fn test_empty_schedule() {
        let summary = summarize::<&str>(&[], EN);
        assert_eq!(summary.weekday, "no information");
        assert_eq!(summary.weekend, "no information");
        assert_eq!(summary.closed_days, "none");
    }

    #[test]
    fn test_uniform_weekdays_closed_weekend() {
        let lines = [
            "Monday: 9:00 AM – 5:00 PM",
            "Tuesday: 9:00 AM – 5:00 PM",
            "Wednesday: 9:00 AM – 5:00 PM",
            "Thursday: 9:00 AM – 5:00 PM",
            "Friday: 9:00 AM – 5:00 PM",
            "Saturday: Closed",
            "Sunday: Closed",
        ];

        let summary = summarize(&lines, EN);

        assert_eq!(summary.weekday, "9:00 AM – 5:00 PM");
        assert_eq!(summary.weekend, "no information");
        assert_eq!(summary.closed_days, "Saturday, Sunday");
    }

    #[test]
    fn test_differing_weekday_hours() {
        let lines = [
            "Monday: 9:00 AM – 5:00 PM",
            "Tuesday: 9:00 AM – 5:00 PM",
            "Wednesday: 9:00 AM – 5:00 PM",
            "Thursday: 9:00 AM – 5:00 PM",
            "Friday: 9:00 AM – 9:00 PM",
            "Saturday: 10:00 AM – 4:00 PM",
            "Sunday: 10:00 AM – 4:00 PM",
        ];

        let summary = summarize(&lines, EN);

        assert_eq!(summary.weekday, "varies by day");
        assert_eq!(summary.weekend, "10:00 AM – 4:00 PM");
        assert_eq!(summary.closed_days, "none");
    }

    #[test]
    fn test_malformed_and_unknown_lines_are_ignored() {
        let lines = [
            "Monday 9:00 AM – 5:00 PM",
            "Holiday: 10:00 AM – 2:00 PM",
            "",
            "Sunday: Open 24 hours",
        ];

        let summary = summarize(&lines, EN);

        assert_eq!(summary.weekday, "no information");
        assert_eq!(summary.weekend, "Open 24 hours");
        assert_eq!(summary.closed_days, "none");
    }

    #[test]
    fn test_splits_on_first_separator_only() {
        let lines = ["Monday: 11:00 AM – 2:00 PM: lunch only"];
        let summary = summarize(&lines, EN);
        assert_eq!(summary.weekday, "11:00 AM – 2:00 PM: lunch only");
    }

    #[test]
    fn test_closed_days_keep_encounter_order() {
        let lines = ["Wednesday: Closed", "Monday: Closed", "Sunday: Closed"];
        let summary = summarize(&lines, EN);
        assert_eq!(summary.closed_days, "Wednesday, Monday, Sunday");
        assert_eq!(summary.weekday, "no information");
    }

    #[test]
    fn test_japanese_schedule() {
        let lines = vec![
            "月曜日: 11時00分～22時00分".to_string(),
            "火曜日: 定休日".to_string(),
            "水曜日: 11時00分～22時00分".to_string(),
            "木曜日: 11時00分～22時00分".to_string(),
            "金曜日: 11時00分～23時00分".to_string(),
            "土曜日: 10時00分～23時00分".to_string(),
            "日曜日: 10時00分～21時00分".to_string(),
        ];

        let summary = summarize(&lines, &HoursLocale::JAPANESE);

        assert_eq!(summary.weekday, "曜日によって異なります");
        assert_eq!(summary.weekend, "曜日によって異なります");
        assert_eq!(summary.closed_days, "火曜日");
    }
}
