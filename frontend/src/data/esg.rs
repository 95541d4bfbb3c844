#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    pub icon: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EsgCard {
    pub label: &'static str,
    pub body: &'static str,
    /// Phrases of `body` rendered in bold.
    pub highlights: &'static [&'static str],
    /// Accent for the label. `None` keeps the default card label color.
    pub accent: Option<&'static str>,
}

pub const ESG_BADGES: &[Badge] = &[
    Badge { icon: "🏆", value: "#6", note: "Barron's 100 Most Sustainable (2025)" },
    Badge { icon: "📊", value: "MSCI AA", note: "ESG rating" },
    Badge { icon: "🌱", value: "$1B", note: "Green bond issued" },
    Badge { icon: "🎯", value: "4/4", note: "2025 customer sustainability goals met" },
];

pub const ESG_CARDS: &[EsgCard] = &[
    EsgCard {
        label: "Climate Commitments",
        body: "Net-zero by 2050. SBTi-approved 2030 targets: 42% absolute reduction Scope 1 & 2, 52% Scope 3 economic intensity reduction. Revolving credit facility pricing tied to sustainability KPIs — meaning customer impact claims are governance-linked, not just marketing.",
        highlights: &["42% absolute reduction", "52% Scope 3"],
        accent: None,
    },
    EsgCard {
        label: "Critical Caveat",
        body: "No corporate-level KPI targeting chemical reduction. ESG targets focus on GHG, water demand, and WASH access. Chemical-free treatment is a product-level narrative, not a board commitment. Xylem also continues to sell chemical feeders and chemical supplies.",
        highlights: &[],
        accent: Some("var(--accent-amber)"),
    },
];
