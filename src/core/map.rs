use crate::domain::locale::HoursLocale;
use crate::domain::model::{Coordinate, PlaceRecord};
use serde::Serialize;

pub const DEFAULT_ZOOM: u8 = 16;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lng: f64,
    number: usize,
    popup: String,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 產生可直接開啟的 Leaflet 地圖：搜尋中心一個標記，每筆資料一個編號圓形標記
pub fn render_map(
    center: Coordinate,
    records: &[PlaceRecord],
    locale: &HoursLocale,
) -> serde_json::Result<String> {
    let markers: Vec<Marker> = records
        .iter()
        .map(|r| Marker {
            lat: r.location.lat,
            lng: r.location.lng,
            number: r.number,
            popup: format!("{}<br>{}", escape_html(&r.name), escape_html(&r.address)),
        })
        .collect();
    // 避免資料中的 `</script>` 提前結束腳本區塊
    let markers_json = serde_json::to_string(&markers)?.replace("</", "<\\/");
    let center_label = serde_json::to_string(&escape_html(locale.center_label))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="stylesheet" href="{css}">
<script src="{js}"></script>
<style>
html, body, #map {{ height: 100%; margin: 0; }}
.place-number {{
  font-size: 10pt; font-weight: bold; color: black; background-color: white;
  border: 2px solid black; border-radius: 50%; width: 30px; height: 30px;
  display: flex; align-items: center; justify-content: center;
}}
</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lng}], {zoom});
L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
L.control.scale().addTo(map);
L.marker([{lat}, {lng}]).bindPopup({center_label}).addTo(map);
var places = {markers};
places.forEach(function (p) {{
  var icon = L.divIcon({{
    className: '',
    html: '<div class="place-number">' + p.number + '</div>',
    iconSize: [34, 34]
  }});
  L.marker([p.lat, p.lng], {{ icon: icon }})
    .bindPopup(p.popup)
    .bindTooltip(String(p.number))
    .addTo(map);
}});
</script>
</body>
</html>
"#,
        lang = locale.language,
        css = LEAFLET_CSS,
        js = LEAFLET_JS,
        lat = center.lat,
        lng = center.lng,
        zoom = DEFAULT_ZOOM,
        center_label = center_label,
        markers = markers_json,
    ))
}
