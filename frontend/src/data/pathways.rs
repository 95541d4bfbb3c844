#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub color: Option<&'static str>,
}

pub const ENTRY_POINTS: &[Step] = &[
    Step {
        num: "01",
        title: "Innovation Labs Partnerships Accelerator",
        body: "Follow the Moleaer template: nanobubble company progressed from 2023 accelerator → commercial agreement. 60+ startups across 15 countries have been engaged. Lowest friction, highest credibility path.",
        color: None,
    },
    Step {
        num: "02",
        title: "Wedeco / Neptune Benson Business Unit Champions",
        body: "Engage directly with aquatics-focused business unit leaders who might champion a complementary technology from within. These teams understand the market gaps and can build internal advocacy.",
        color: None,
    },
    Step {
        num: "03",
        title: "Burnt Island Ventures",
        body: "Xylem is anchor investor in this water-focused VC fund. Potential venture-stage entry point that could build relationship before a full acquisition conversation.",
        color: None,
    },
];

pub const QUESTIONS: &[Step] = &[
    Step {
        num: "?1",
        title: "Is Neptune Benson in the \"80\" or the \"20\"?",
        body: "Determine through industry contacts or by tracking whether Xylem is investing in or divesting from aquatics. This single data point determines whether Xylem is worth pursuing at all.",
        color: Some("var(--accent-amber)"),
    },
    Step {
        num: "?2",
        title: "Does cavitation have cross-market applications?",
        body: "Industrial wastewater, PFAS treatment, building water systems — any applicability to Xylem's higher-priority markets would dramatically increase strategic interest and reframe the acquisition thesis entirely.",
        color: Some("var(--accent-amber)"),
    },
    Step {
        num: "?3",
        title: "Have you engaged Fluidra and Pentair yet?",
        body: "These conversations should be prioritized. Pool/spa is core business for both, M&A appetite for water treatment innovation is active, and the organizational fit for a small innovative company is fundamentally stronger.",
        color: Some("var(--accent-amber)"),
    },
];
