// Domain layer: 搜尋結果的資料模型、地區化字串表與對外介面 (ports)

pub mod category;
pub mod locale;
pub mod model;
pub mod ports;
