// src/fundamentals.rs
//! Mocked descriptive data shown next to a forecast. Nothing here is live
//! market data.

/// Ordered (label, value) rows for one ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fundamentals {
    pub sector: &'static str,
    pub industry: &'static str,
    pub forward_pe: &'static str,
    pub dividend_yield: &'static str,
    pub beta: &'static str,
}

impl Fundamentals {
    pub fn rows(&self) -> [(&'static str, &'static str); 5] {
        [
            ("Sector", self.sector),
            ("Industry", self.industry),
            ("Forward P/E", self.forward_pe),
            ("Dividend Yield", self.dividend_yield),
            ("Beta", self.beta),
        ]
    }
}

const TSLA: Fundamentals = Fundamentals {
    sector: "Consumer Cyclical",
    industry: "Auto Manufacturers",
    forward_pe: "58.21",
    dividend_yield: "0.00%",
    beta: "2.23",
};

const GOOGL: Fundamentals = Fundamentals {
    sector: "Technology",
    industry: "Internet Content & Information",
    forward_pe: "22.50",
    dividend_yield: "0.00%",
    beta: "1.05",
};

const AAPL: Fundamentals = Fundamentals {
    sector: "Technology",
    industry: "Consumer Electronics",
    forward_pe: "28.00",
    dividend_yield: "0.55%",
    beta: "1.25",
};

const FALLBACK: Fundamentals = Fundamentals {
    sector: "Technology",
    industry: "Consumer Electronics",
    forward_pe: "33.56",
    dividend_yield: "3.70%",
    beta: "1.11",
};

/// Look up a normalised (upper-case) ticker; unknown tickers get the
/// generic technology entry.
pub fn lookup(ticker: &str) -> Fundamentals {
    match ticker {
        "TSLA" => TSLA,
        "GOOGL" => GOOGL,
        "AAPL" => AAPL,
        _ => FALLBACK,
    }
}
