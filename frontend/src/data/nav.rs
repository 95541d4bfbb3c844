pub const VERDICT: &str = "verdict";
pub const FINANCIALS: &str = "financials";
pub const AQUATICS: &str = "aquatics";
pub const GAPS: &str = "gaps";
pub const ESG: &str = "esg";
pub const ALIGNMENT: &str = "alignment";
pub const RISK: &str = "risk";
pub const COMPETITORS: &str = "competitors";
pub const DILIGENCE: &str = "diligence";
pub const PATHWAYS: &str = "pathways";
pub const TIMELINE: &str = "timeline";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: VERDICT, label: "Verdict" },
    NavItem { id: FINANCIALS, label: "Financials" },
    NavItem { id: AQUATICS, label: "Aquatics Portfolio" },
    NavItem { id: GAPS, label: "Gap Analysis" },
    NavItem { id: ESG, label: "ESG Alignment" },
    NavItem { id: ALIGNMENT, label: "Value-Driver Fit" },
    NavItem { id: RISK, label: "80/20 Risk" },
    NavItem { id: COMPETITORS, label: "Competitor Fit" },
    NavItem { id: DILIGENCE, label: "Diligence" },
    NavItem { id: PATHWAYS, label: "Pathways" },
    NavItem { id: TIMELINE, label: "Timeline" },
];

pub fn section_ids() -> Vec<String> {
    NAV_ITEMS.iter().map(|item| item.id.to_string()).collect()
}
