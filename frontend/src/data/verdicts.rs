#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verdict {
    pub rank: &'static str,
    pub company: &'static str,
    /// Out of 10.
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
    /// Percent width of the bar once revealed.
    pub bar_width: u8,
}

pub const VERDICTS: &[Verdict] = &[
    Verdict {
        rank: "Rank #1 — Best Fit",
        company: "Fluidra",
        score: 10,
        label: "Pool & wellness is their entire business. Active non-chemical innovation (Freepool2). ~€2.3B revenue.",
        color: "var(--fluidra-color)",
        bar_width: 100,
    },
    Verdict {
        rank: "Rank #2 — Strong Fit",
        company: "Pentair",
        score: 9,
        label: "Pool/spa is ~40%+ of ~$3.8B revenue. Markets \"96% chloramine reduction without harmful chemicals.\"",
        color: "var(--pentair-color)",
        bar_width: 90,
    },
    Verdict {
        rank: "Rank #3 — Conditional Fit",
        company: "Xylem",
        score: 5,
        label: "Entry point via Neptune Benson, but aquatics may be in the \"prune\" column under 80/20 simplification.",
        color: "var(--xylem-color)",
        bar_width: 50,
    },
];
