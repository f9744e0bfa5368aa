/// 基本市況報導網站的個股即時報價
pub mod realtime;
