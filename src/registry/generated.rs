// Code generated from isin.twse.com.tw C_public.jsp strMode=2,4. DO NOT EDIT.
//
// Snapshot limited to widely held listed stocks, ETFs and OTC stocks.

use super::Entry;
use crate::{declare::Market, util::datetime::ymd};

pub(super) const SECURITIES: &[Entry] = &[
    Entry {
        security_type: "股票",
        code: "1101",
        name: "台泥",
        isin: "TW0001101004",
        ipo: ymd(1962, 2, 9),
        market: Market::TWSE,
        industry: "水泥工業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "1102",
        name: "亞泥",
        isin: "TW0001102002",
        ipo: ymd(1962, 6, 8),
        market: Market::TWSE,
        industry: "水泥工業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "1216",
        name: "統一",
        isin: "TW0001216000",
        ipo: ymd(1987, 12, 28),
        market: Market::TWSE,
        industry: "食品工業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "1301",
        name: "台塑",
        isin: "TW0001301000",
        ipo: ymd(1964, 7, 27),
        market: Market::TWSE,
        industry: "塑膠工業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2002",
        name: "中鋼",
        isin: "TW0002002003",
        ipo: ymd(1974, 12, 26),
        market: Market::TWSE,
        industry: "鋼鐵工業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2303",
        name: "聯電",
        isin: "TW0002303005",
        ipo: ymd(1985, 7, 16),
        market: Market::TWSE,
        industry: "半導體業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2317",
        name: "鴻海",
        isin: "TW0002317005",
        ipo: ymd(1991, 6, 18),
        market: Market::TWSE,
        industry: "其他電子業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2330",
        name: "台積電",
        isin: "TW0002330008",
        ipo: ymd(1994, 9, 5),
        market: Market::TWSE,
        industry: "半導體業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2412",
        name: "中華電",
        isin: "TW0002412004",
        ipo: ymd(2000, 10, 27),
        market: Market::TWSE,
        industry: "通信網路業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2454",
        name: "聯發科",
        isin: "TW0002454006",
        ipo: ymd(2001, 7, 23),
        market: Market::TWSE,
        industry: "半導體業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2881",
        name: "富邦金",
        isin: "TW0002881000",
        ipo: ymd(2001, 12, 19),
        market: Market::TWSE,
        industry: "金融保險業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2308",
        name: "台達電",
        isin: "TW0002308004",
        ipo: ymd(1988, 12, 19),
        market: Market::TWSE,
        industry: "電子零組件業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2603",
        name: "長榮",
        isin: "TW0002603008",
        ipo: ymd(1987, 9, 21),
        market: Market::TWSE,
        industry: "航運業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2882",
        name: "國泰金",
        isin: "TW0002882008",
        ipo: ymd(2001, 12, 31),
        market: Market::TWSE,
        industry: "金融保險業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "2891",
        name: "中信金",
        isin: "TW0002891009",
        ipo: ymd(2002, 5, 17),
        market: Market::TWSE,
        industry: "金融保險業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "ETF",
        code: "0050",
        name: "元大台灣50",
        isin: "TW0000050004",
        ipo: ymd(2003, 6, 30),
        market: Market::TWSE,
        industry: "",
        cfi: "CEOGEU",
        remark: "",
    },
    Entry {
        security_type: "ETF",
        code: "0056",
        name: "元大高股息",
        isin: "TW0000056001",
        ipo: ymd(2007, 12, 26),
        market: Market::TWSE,
        industry: "",
        cfi: "CEOGEU",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "3374",
        name: "精材",
        isin: "TW0003374005",
        ipo: ymd(2015, 10, 19),
        market: Market::TPEx,
        industry: "半導體業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "5483",
        name: "中美晶",
        isin: "TW0005483002",
        ipo: ymd(2001, 3, 12),
        market: Market::TPEx,
        industry: "半導體業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "6488",
        name: "環球晶",
        isin: "TW0006488000",
        ipo: ymd(2015, 9, 25),
        market: Market::TPEx,
        industry: "半導體業",
        cfi: "ESVUFR",
        remark: "",
    },
    Entry {
        security_type: "股票",
        code: "8069",
        name: "元太",
        isin: "TW0008069006",
        ipo: ymd(2004, 3, 9),
        market: Market::TPEx,
        industry: "光電業",
        cfi: "ESVUFR",
        remark: "",
    },
];
