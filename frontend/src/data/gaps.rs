#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Whitespace,
    Critical,
    High,
}

impl Severity {
    /// Badge text, also used as the CSS modifier class.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Whitespace => "whitespace",
            Severity::Critical => "critical",
            Severity::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gap {
    pub name: &'static str,
    pub severity: Severity,
    pub note: &'static str,
}

pub const GAPS: &[Gap] = &[
    Gap {
        name: "Hydrodynamic Cavitation",
        severity: Severity::Whitespace,
        note: "Zero products, patents, or partnerships. Complete greenfield for HydroCav.",
    },
    Gap {
        name: "Pool-Scale AOP",
        severity: Severity::Critical,
        note: "MiPRO AOP exists but is over-engineered for recreational water applications.",
    },
    Gap {
        name: "Non-Chemical Treatment",
        severity: Severity::High,
        note: "UV supplements chlorine but doesn't replace it. No pathway to true chemical reduction at the source.",
    },
    Gap {
        name: "Pool/Spa IoT",
        severity: Severity::High,
        note: "Xylem Vue is utility-focused. No dedicated pool automation or connected device platform.",
    },
    Gap {
        name: "Indoor Air Quality",
        severity: Severity::High,
        note: "Indirect water-side UV only. No dedicated air-side chloramine treatment.",
    },
    Gap {
        name: "Salt Water Alternatives",
        severity: Severity::Whitespace,
        note: "Market dominated by Pentair, Hayward, CircuPool. Xylem has no offering.",
    },
];
