#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Signal {
    pub label: &'static str,
    /// Percent fill of the bar once revealed.
    pub width: u8,
    pub gradient: &'static str,
    pub rating: &'static str,
    pub rating_color: &'static str,
}

pub const SIGNALS: &[Signal] = &[
    Signal {
        label: "Sustainability & Chemical Reduction",
        width: 85,
        gradient: "linear-gradient(90deg,var(--accent-green),var(--accent-cyan))",
        rating: "Strong",
        rating_color: "var(--accent-green)",
    },
    Signal {
        label: "Labor Reduction & Uptime",
        width: 82,
        gradient: "linear-gradient(90deg,var(--accent-green),var(--accent-cyan))",
        rating: "Strong",
        rating_color: "var(--accent-green)",
    },
    Signal {
        label: "Indoor Air Quality / Chloramines",
        width: 78,
        gradient: "linear-gradient(90deg,var(--accent-cyan),var(--accent-blue))",
        rating: "Strong",
        rating_color: "var(--accent-cyan)",
    },
    Signal {
        label: "Pathogen Elimination",
        width: 55,
        gradient: "linear-gradient(90deg,var(--accent-amber),var(--accent-amber))",
        rating: "Moderate",
        rating_color: "var(--accent-amber)",
    },
    Signal {
        label: "Regulatory Compliance Readiness",
        width: 35,
        gradient: "linear-gradient(90deg,var(--accent-red),var(--accent-amber))",
        rating: "Flag Early",
        rating_color: "var(--accent-red)",
    },
    Signal {
        label: "Strategic Priority Alignment (AI/Digital)",
        width: 20,
        gradient: "linear-gradient(90deg,var(--accent-red),var(--accent-red))",
        rating: "Misaligned",
        rating_color: "var(--accent-red)",
    },
];
