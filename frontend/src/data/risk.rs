pub const RISK_SIGNALS: &[&str] = &[
    "Up to 10% of revenue under divestiture review",
    "~$250M of businesses already exited",
    "Deliberate 2% revenue headwind in 2026",
    "M&A focus shifted to AI / software",
    "Still digesting the $7.5B Evoqua deal",
];
