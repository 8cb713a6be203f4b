/// 營業時間摘要所需的地區化字串表
///
/// `weekday_text` 的星期標籤、公休日標記與輸出用的哨兵字串都隨語言而變，
/// 摘要演算法本身只透過這張表比對，不內嵌任何字面值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursLocale {
    pub language: &'static str,
    pub weekdays: [&'static str; 5],
    pub weekend: [&'static str; 2],
    /// Provider 用來表示整天公休的描述
    pub closed: &'static str,
    pub no_information: &'static str,
    pub varies_by_day: &'static str,
    pub no_closed_days: &'static str,
    pub columns: [&'static str; 6],
    pub center_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayGroup {
    Weekday,
    Weekend,
}

impl HoursLocale {
    pub const JAPANESE: HoursLocale = HoursLocale {
        language: "ja",
        weekdays: ["月曜日", "火曜日", "水曜日", "木曜日", "金曜日"],
        weekend: ["土曜日", "日曜日"],
        closed: "定休日",
        no_information: "情報なし",
        varies_by_day: "曜日によって異なります",
        no_closed_days: "なし",
        columns: ["番号", "名称", "住所", "平日営業時間", "休日営業時間", "定休日"],
        center_label: "企業の位置",
    };

    pub const ENGLISH: HoursLocale = HoursLocale {
        language: "en",
        weekdays: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        weekend: ["Saturday", "Sunday"],
        closed: "Closed",
        no_information: "no information",
        varies_by_day: "varies by day",
        no_closed_days: "none",
        columns: [
            "No.",
            "Name",
            "Address",
            "Weekday hours",
            "Weekend hours",
            "Closed days",
        ],
        center_label: "Search center",
    };

    pub fn for_language(language: &str) -> Option<&'static HoursLocale> {
        [&Self::JAPANESE, &Self::ENGLISH]
            .into_iter()
            .find(|locale| locale.language == language)
    }

    pub fn classify(&self, label: &str) -> Option<DayGroup> {
        if self.weekdays.contains(&label) {
            Some(DayGroup::Weekday)
        } else if self.weekend.contains(&label) {
            Some(DayGroup::Weekend)
        } else {
            None
        }
    }
}

impl Default for HoursLocale {
    fn default() -> Self {
        Self::JAPANESE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_fixed_vocabulary() {
        let ja = HoursLocale::JAPANESE;
        assert_eq!(ja.classify("金曜日"), Some(DayGroup::Weekday));
        assert_eq!(ja.classify("日曜日"), Some(DayGroup::Weekend));
        assert_eq!(ja.classify("祝日"), None);
        assert_eq!(ja.classify("Monday"), None);
    }

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(HoursLocale::for_language("en"), Some(&HoursLocale::ENGLISH));
        assert_eq!(HoursLocale::for_language("ja").unwrap().closed, "定休日");
        assert!(HoursLocale::for_language("de").is_none());
    }
}
