//! The numbered body sections of the report, in page order.

mod alignment;
mod aquatics;
mod competitors;
mod diligence;
mod esg;
mod financials;
mod gaps;
mod pathways;
mod risk;
mod timeline;

pub use alignment::AlignmentSection;
pub use aquatics::AquaticsSection;
pub use competitors::CompetitorSection;
pub use diligence::DiligenceSection;
pub use esg::EsgSection;
pub use financials::FinancialSection;
pub use gaps::GapSection;
pub use pathways::PathwaysSection;
pub use risk::RiskSection;
pub use timeline::TimelineSection;
