#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub date: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const EVENTS: &[Event] = &[
    Event {
        date: "MAY 2023",
        title: "Evoqua Acquisition Closes",
        desc: "$7.5B all-stock deal. Creates world's largest pure-play water technology company. Inherits Neptune Benson aquatics brand.",
    },
    Event {
        date: "JAN 2024",
        title: "Matthew Pine Becomes CEO",
        desc: "Replaces Patrick Decker. Background: Carrier, Vestas, Lennox. Immediately signals \"simplification\" strategy.",
    },
    Event {
        date: "JAN 2024",
        title: "Segment Realignment",
        desc: "Four new segments created including \"Water Solutions & Services\" — unifying legacy Evoqua services with Xylem to accelerate synergies.",
    },
    Event {
        date: "2024–2025",
        title: "80/20 Simplification Launches",
        desc: "Up to 10% of revenue evaluated for divestiture. Specialty anodes and international metering divested (~$250M). AI/software M&A prioritized.",
    },
    Event {
        date: "DEC 2025",
        title: "SBTi Targets Approved",
        desc: "Climate Action Plan updated. 42% Scope 1 & 2 reduction by 2030. Net-zero by 2050 commitment formalized.",
    },
    Event {
        date: "FEB 2026",
        title: "FY2025 Results & Conservative Guidance",
        desc: "Record $9.0B revenue. But FY2026 guidance of $9.1–9.2B disappoints — 2% simplification headwind. Stock drops 12%. $1.5B buyback announced.",
    },
];
