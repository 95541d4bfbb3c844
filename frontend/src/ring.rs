//! Stroke math for circular score rings.

use std::f64::consts::PI;

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// `stroke-dashoffset` that leaves `score` percent of the ring drawn.
///
/// Scores outside 0..=100 are clamped.
pub fn dash_offset(score: f64, radius: f64) -> f64 {
    let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
    circumference(radius) * (1.0 - score / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 33.0;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_score_hides_whole_ring() {
        assert!(close(dash_offset(0.0, RADIUS), circumference(RADIUS)));
    }

    #[test]
    fn full_score_draws_whole_ring() {
        assert!(close(dash_offset(100.0, RADIUS), 0.0));
    }

    #[test]
    fn half_score_draws_half() {
        assert!(close(dash_offset(50.0, RADIUS), circumference(RADIUS) / 2.0));
    }

    #[test]
    fn circumference_of_report_ring() {
        assert!((circumference(RADIUS) - 207.345).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert!(close(dash_offset(140.0, RADIUS), 0.0));
        assert!(close(dash_offset(-5.0, RADIUS), circumference(RADIUS)));
    }
}
