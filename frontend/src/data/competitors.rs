#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Competitor {
    pub company: &'static str,
    /// Out of 10; drives the score ring.
    pub score: u8,
    pub description: &'static str,
    pub color: &'static str,
    /// Ring track color.
    pub track_color: &'static str,
    pub tags: &'static [&'static str],
    pub tag_style: &'static str,
    pub detail: &'static str,
}

impl Competitor {
    pub fn score_percent(&self) -> f64 {
        f64::from(self.score) * 10.0
    }
}

pub const COMPETITORS: &[Competitor] = &[
    Competitor {
        company: "Fluidra",
        score: 10,
        description: "~€2.3B revenue · Pool & wellness is the entire business",
        color: "var(--fluidra-color)",
        track_color: "rgba(52,211,153,0.2)",
        tags: &["Freepool2", "Active Acquirer", "Hospitality"],
        tag_style: "color: var(--fluidra-color); background: rgba(52,211,153,0.1); border: 1px solid rgba(52,211,153,0.2);",
        detail: "Most active pool tech acquirer (4 deals in 2021 + Variopool + ~$100M Aiper). Freepool2 system (UV + low-salinity electrolysis + CO₂) proves direct interest in non-chemical pool innovation. Distribution infrastructure already built for pool-specific technology scaling.",
    },
    Competitor {
        company: "Pentair",
        score: 9,
        description: "~$3.8B revenue · Pool/spa is ~40%+ of revenue",
        color: "var(--pentair-color)",
        track_color: "rgba(59,139,235,0.2)",
        tags: &["IntelliChlor", "96% Chloramine Reduction", "Full Stack"],
        tag_style: "color: var(--pentair-color); background: rgba(59,139,235,0.1); border: 1px solid rgba(59,139,235,0.2);",
        detail: "Already markets \"up to 96% chloramine reduction without harmful chemicals\" for commercial pools. Deep residential + commercial penetration. Comprehensive platform: pumps, filters, heaters, salt chlorination, lighting, automation (ScreenLogic).",
    },
    Competitor {
        company: "Xylem",
        score: 5,
        description: "$9.0B revenue · Aquatics is a niche within a massive portfolio",
        color: "var(--xylem-color)",
        track_color: "rgba(251,191,36,0.2)",
        tags: &["Neptune Benson", "80/20 Risk", "AI/Digital Focus"],
        tag_style: "color: var(--xylem-color); background: rgba(251,191,36,0.1); border: 1px solid rgba(251,191,36,0.2);",
        detail: "Entry point exists via Neptune Benson heritage, but aquatics is potentially at risk under 80/20 simplification. Strategic timing is wrong — digesting Evoqua, simplifying portfolio, pivoting to digital/AI. Tier-two acquirer that upgrades to tier-one only if HydroCav proves cross-market applicability.",
    },
];
