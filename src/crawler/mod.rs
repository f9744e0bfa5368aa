/// 國際證券辨識號碼一覽表
pub mod isin;
/// 基本市況報導網站
pub mod mis;
/// 依證券清單分派個股日成交資訊
pub mod quote;
/// 共用 證交所、櫃買中心的回應格式與欄位解析
pub(crate) mod share;
/// 台灣證券櫃檯買賣中心
pub mod tpex;
/// 台灣證券交易所
pub mod twse;
