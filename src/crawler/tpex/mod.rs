/// 終止上櫃公司
pub mod delisted;
/// 每日市場成交資訊-上櫃
pub mod market_data;
/// 個股日成交資訊-上櫃
pub mod quote;
