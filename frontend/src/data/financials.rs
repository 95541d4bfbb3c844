#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row {
    pub metric: &'static str,
    pub value: &'static str,
    pub implication: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Revenue (FY2025)", value: "$9.0B", note: "Record year · Fortune 500" },
    Stat { label: "Adj. EBITDA", value: "~$2.0B", note: "22.2% margin" },
    Stat { label: "Free Cash Flow", value: "$942M", note: "Strong conversion" },
    Stat { label: "Net Leverage", value: "0.4–0.5×", note: "$4–5B additional capacity" },
];

pub const ROWS: &[Row] = &[
    Row { metric: "Available Liquidity", value: "~$2.2B", implication: "A $10–50M tuck-in is easily absorbed" },
    Row { metric: "Credit Rating", value: "BBB / Baa2", implication: "Investment-grade; low cost of capital" },
    Row { metric: "Stated M&A Budget", value: "~$1B/yr", implication: "Active acquirer across all deal sizes" },
    Row { metric: "Historical Multiples", value: "10–17× EBITDA", implication: "Standard range for strategic water tech" },
    Row { metric: "FY2026 Guidance", value: "$9.1–9.2B", implication: "Conservative; 2% headwind from simplification" },
    Row { metric: "Capital Allocation Priority", value: "M&A first", implication: "Reinvest → M&A → dividends → buybacks" },
];
