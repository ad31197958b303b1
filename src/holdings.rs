/// Scale at which a holding's magnitude bar is full width.
const BAR_FULL_SCALE_PCT: f64 = 65.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Stocks,
    Etfs,
    Crypto,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Stocks, Self::Etfs, Self::Crypto];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::Etfs => "ETFs",
            Self::Crypto => "Crypto",
        }
    }

    pub fn holdings(self) -> &'static [Holding] {
        match self {
            Self::Stocks => STOCKS,
            Self::Etfs => ETFS,
            Self::Crypto => CRYPTO,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoldingsTab {
    #[default]
    All,
    Only(Category),
}

impl HoldingsTab {
    pub const ALL: [HoldingsTab; 4] = [
        Self::All,
        Self::Only(Category::Stocks),
        Self::Only(Category::Etfs),
        Self::Only(Category::Crypto),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn holdings(self) -> Vec<&'static Holding> {
        match self {
            Self::All => Category::ALL
                .iter()
                .flat_map(|category| category.holdings())
                .collect(),
            Self::Only(category) => category.holdings().iter().collect(),
        }
    }

    pub fn count(self) -> usize {
        match self {
            Self::All => Category::ALL.iter().map(|category| category.holdings().len()).sum(),
            Self::Only(category) => category.holdings().len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Holding {
    pub ticker: &'static str,
    pub name: &'static str,
    pub ytd_pct: f64,
    pub price: f64,
    pub sector: &'static str,
}

impl Holding {
    pub fn is_gain(&self) -> bool {
        self.ytd_pct >= 0.0
    }

    pub fn bar_width_pct(&self) -> f64 {
        (self.ytd_pct.abs() / BAR_FULL_SCALE_PCT * 100.0).min(100.0)
    }
}

const STOCKS: &[Holding] = &[
    Holding { ticker: "AAPL", name: "Apple Inc.", ytd_pct: -2.6, price: 264.58, sector: "Tech" },
    Holding { ticker: "FCX", name: "Freeport-McMoRan", ytd_pct: 12.2, price: 68.08, sector: "Mining" },
    Holding { ticker: "KRKNF", name: "Kraken Robotics", ytd_pct: 15.8, price: 6.30, sector: "Defense Tech" },
];

const ETFS: &[Holding] = &[
    Holding { ticker: "OIH", name: "VanEck Oil Services", ytd_pct: 10.5, price: 313.63, sector: "Energy" },
    Holding { ticker: "XLE", name: "Energy Select SPDR", ytd_pct: 19.1, price: 51.20, sector: "Energy" },
    Holding { ticker: "ACWX", name: "MSCI ACWI ex U.S.", ytd_pct: 8.4, price: 57.80, sector: "Int'l Equity" },
    Holding { ticker: "IHE", name: "U.S. Pharmaceuticals", ytd_pct: 9.7, price: 186.40, sector: "Healthcare" },
    Holding { ticker: "IVV", name: "Core S&P 500", ytd_pct: -0.1, price: 602.50, sector: "Large Cap" },
];

const CRYPTO: &[Holding] = &[
    Holding { ticker: "BTC", name: "Bitcoin", ytd_pct: -29.5, price: 65_883.0, sector: "Layer 1" },
    Holding { ticker: "ETH", name: "Ethereum", ytd_pct: -42.4, price: 1_929.0, sector: "Layer 1" },
    Holding { ticker: "LINK", name: "Chainlink", ytd_pct: -62.2, price: 8.31, sector: "Oracle" },
];

pub const DATA_AS_OF: &str = "Feb 28, 2026";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoldingsSummary {
    pub average_ytd_pct: f64,
    pub winners: usize,
    pub losers: usize,
}

impl HoldingsSummary {
    /// Flat positions count as neither winners nor losers. An empty set
    /// averages to zero.
    pub fn from_ytd<I>(ytd_values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sum = 0.0;
        let mut len = 0usize;
        let mut summary = Self::default();

        for ytd in ytd_values {
            sum += ytd;
            len += 1;
            if ytd > 0.0 {
                summary.winners += 1;
            } else if ytd < 0.0 {
                summary.losers += 1;
            }
        }

        if len > 0 {
            summary.average_ytd_pct = sum / len as f64;
        }

        summary
    }

    pub fn for_tab(tab: HoldingsTab) -> Self {
        Self::from_ytd(tab.holdings().into_iter().map(|holding| holding.ytd_pct))
    }
}

/// `+12.2%` / `-2.6%`, one decimal.
pub fn format_signed_pct(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}%")
}

/// `$65,883.00`, grouped thousands and two decimals.
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);

    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_for_literal_set() {
        let summary = HoldingsSummary::from_ytd([10.0, -5.0, 0.0]);

        assert!((summary.average_ytd_pct - 1.6667).abs() < 1e-3);
        assert_eq!(summary.winners, 1);
        assert_eq!(summary.losers, 1);
        assert_eq!(format_signed_pct(summary.average_ytd_pct), "+1.7%");
    }

    #[test]
    fn empty_set_averages_to_zero() {
        assert_eq!(HoldingsSummary::from_ytd([]), HoldingsSummary::default());
    }

    #[test]
    fn all_tab_concatenates_categories_in_order() {
        let tickers: Vec<&str> = HoldingsTab::All
            .holdings()
            .into_iter()
            .map(|holding| holding.ticker)
            .collect();

        assert_eq!(
            tickers,
            ["AAPL", "FCX", "KRKNF", "OIH", "XLE", "ACWX", "IHE", "IVV", "BTC", "ETH", "LINK"]
        );
    }

    #[test]
    fn category_tab_is_exactly_that_category() {
        let etfs = HoldingsTab::Only(Category::Etfs).holdings();

        assert_eq!(etfs.len(), 5);
        assert_eq!(etfs.first().map(|holding| holding.ticker), Some("OIH"));
        assert_eq!(etfs.last().map(|holding| holding.ticker), Some("IVV"));
    }

    #[test]
    fn tab_counts_match_the_data() {
        let counts: Vec<(&str, usize)> = HoldingsTab::ALL
            .into_iter()
            .map(|tab| (tab.label(), tab.count()))
            .collect();

        assert_eq!(counts, [("All", 11), ("Stocks", 3), ("ETFs", 5), ("Crypto", 3)]);
    }

    #[test]
    fn crypto_tab_is_all_losers() {
        let summary = HoldingsSummary::for_tab(HoldingsTab::Only(Category::Crypto));

        assert_eq!(summary.winners, 0);
        assert_eq!(summary.losers, 3);
        assert_eq!(format_signed_pct(summary.average_ytd_pct), "-44.7%");
    }

    #[test]
    fn full_portfolio_summary() {
        let summary = HoldingsSummary::for_tab(HoldingsTab::All);

        assert_eq!(summary.winners, 6);
        assert_eq!(summary.losers, 5);
        assert_eq!(format_signed_pct(summary.average_ytd_pct), "-5.6%");
    }

    #[test]
    fn prices_are_grouped_with_two_decimals() {
        assert_eq!(format_price(65_883.0), "$65,883.00");
        assert_eq!(format_price(6.3), "$6.30");
        assert_eq!(format_price(1_929.0), "$1,929.00");
        assert_eq!(format_price(602.5), "$602.50");
        assert_eq!(format_price(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn bar_width_caps_at_full_scale() {
        let crash = Holding {
            ticker: "XYZ",
            name: "Example",
            ytd_pct: -80.0,
            price: 1.0,
            sector: "Test",
        };
        let link = HoldingsTab::Only(Category::Crypto).holdings()[2];

        assert_eq!(crash.bar_width_pct(), 100.0);
        assert!((link.bar_width_pct() - 95.692).abs() < 1e-2);
        assert!((STOCKS[1].bar_width_pct() - 18.769).abs() < 1e-2);
        assert!(!STOCKS[0].is_gain());
    }
}
