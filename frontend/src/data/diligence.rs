#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hurdle {
    pub label: &'static str,
    pub body: &'static str,
}

pub const HURDLES: &[Hurdle] = &[
    Hurdle {
        label: "1 · Pathogen Performance Data",
        body: "Third-party inactivation data under representative bather loads and water chemistries required. Must include defensible comparison versus UV/ozone pathways already in Xylem's portfolio — especially for chlorine-tolerant pathogens (Crypto, Giardia).",
    },
    Hurdle {
        label: "2 · Compliance Reconciliation",
        body: "CDC guidance requires ≥1 ppm free chlorine (pools) and ≥3 ppm (hot tubs). HydroCav's \"micro-dosing <1 ppm\" claim must be precisely scoped: which venue classes, local codes, secondary barriers, and verification methodology.",
    },
    Hurdle {
        label: "3 · Integration Architecture",
        body: "Must demonstrate how cavitation affects existing filtration + UV + controller packages: does it reduce combined-chlorine excursions, improve UV transmittance, reduce corrosion, or lower lifecycle cost? Additive value to the existing multi-barrier system is key.",
    },
    Hurdle {
        label: "4 · Scalability Evidence",
        body: "Product must support multi-site operator deployment with standardized monitoring, compliance verification hooks, and remote serviceability. Xylem's portfolio is engineered for enterprise-scale operations — a niche, bespoke product would increase complexity under 80/20.",
    },
];
