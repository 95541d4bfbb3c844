mod animate_in;
mod footer;
mod header;
mod hero;
mod nav_bar;
mod report_section;
mod score_ring;
mod verdict_strip;

pub use animate_in::AnimateIn;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use report_section::{ReportSection, SectionHeader};
pub use score_ring::ScoreRing;
pub use verdict_strip::VerdictStrip;
