mod intersection;
mod scroll_spy;

pub use intersection::use_intersection;
pub use scroll_spy::use_scroll_spy;
