// src/render/bands.rs
use eframe::egui::Color32;

/// One threshold-to-color rule. Bands are evaluated in descending threshold
/// order, first match wins.
#[derive(Debug, Clone, Copy)]
pub struct VisualBand {
    pub threshold: f32,
    pub color: Color32,
}

pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(40, 167, 69);
pub const WARNING_YELLOW: Color32 = Color32::from_rgb(255, 193, 7);
pub const DANGER_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Match-score bands: high scores are good.
pub const MATCH_BANDS: [VisualBand; 3] = [
    VisualBand { threshold: 70.0, color: SUCCESS_GREEN },
    VisualBand { threshold: 40.0, color: WARNING_YELLOW },
    VisualBand { threshold: f32::NEG_INFINITY, color: DANGER_RED },
];

/// Risk bands: high values are bad. Edges at 30 and 70, inclusive on the
/// higher band.
pub const RISK_BANDS: [VisualBand; 3] = [
    VisualBand { threshold: 70.0, color: DANGER_RED },
    VisualBand { threshold: 30.0, color: WARNING_YELLOW },
    VisualBand { threshold: f32::NEG_INFINITY, color: SUCCESS_GREEN },
];

/// Maps a value onto a band color. Total over all finite inputs as long as
/// the band set ends in a catch-all threshold; no clamping is applied, so
/// out-of-range values simply land in the nearest outer band.
pub fn color_for(value: f32, bands: &[VisualBand]) -> Color32 {
    bands
        .iter()
        .find(|band| value >= band.threshold)
        .map(|band| band.color)
        .unwrap_or(Color32::GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_bands_cover_full_range() {
        for score in 0..=100 {
            let color = color_for(score as f32, &RISK_BANDS);
            assert!(
                color == SUCCESS_GREEN || color == WARNING_YELLOW || color == DANGER_RED,
                "score {} mapped outside the fixed color set",
                score
            );
        }
    }

    #[test]
    fn test_risk_band_edges_inclusive_on_higher_band() {
        assert_eq!(color_for(29.9, &RISK_BANDS), SUCCESS_GREEN);
        assert_eq!(color_for(30.0, &RISK_BANDS), WARNING_YELLOW);
        assert_eq!(color_for(69.9, &RISK_BANDS), WARNING_YELLOW);
        assert_eq!(color_for(70.0, &RISK_BANDS), DANGER_RED);
        assert_eq!(color_for(100.0, &RISK_BANDS), DANGER_RED);
    }

    #[test]
    fn test_match_band_edges() {
        assert_eq!(color_for(0.0, &MATCH_BANDS), DANGER_RED);
        assert_eq!(color_for(39.9, &MATCH_BANDS), DANGER_RED);
        assert_eq!(color_for(40.0, &MATCH_BANDS), WARNING_YELLOW);
        assert_eq!(color_for(70.0, &MATCH_BANDS), SUCCESS_GREEN);
        assert_eq!(color_for(85.0, &MATCH_BANDS), SUCCESS_GREEN);
    }

    #[test]
    fn test_out_of_range_values_take_outer_bands() {
        // Not clamped: anything below every positive threshold falls into the
        // catch-all band, anything above the top threshold takes the top band.
        assert_eq!(color_for(-5.0, &RISK_BANDS), SUCCESS_GREEN);
        assert_eq!(color_for(150.0, &RISK_BANDS), DANGER_RED);
        assert_eq!(color_for(-5.0, &MATCH_BANDS), DANGER_RED);
        assert_eq!(color_for(150.0, &MATCH_BANDS), SUCCESS_GREEN);
    }

    #[test]
    fn test_empty_band_set_is_neutral() {
        assert_eq!(color_for(50.0, &[]), Color32::GRAY);
    }
}
