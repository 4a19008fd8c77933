// src/render/binder.rs
//
// Pure projection of analysis fields onto display values: badge styles,
// per-slot fallback strings, and the sentiment marker position. The actual
// widgets live in ui::widgets; everything here is testable without a UI.
use eframe::egui::Color32;

use crate::model::RiskLevel;

/// Fixed, mutually exclusive badge styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Danger,
    Warning,
    Secondary,
    Primary,
}

impl BadgeStyle {
    pub fn fill(self) -> Color32 {
        match self {
            BadgeStyle::Success => Color32::from_rgb(40, 167, 69),
            BadgeStyle::Danger => Color32::from_rgb(220, 53, 69),
            BadgeStyle::Warning => Color32::from_rgb(255, 193, 7),
            BadgeStyle::Secondary => Color32::from_rgb(108, 117, 125),
            BadgeStyle::Primary => Color32::from_rgb(13, 110, 253),
        }
    }

    pub fn text_color(self) -> Color32 {
        match self {
            // Dark text on the yellow badge, white everywhere else.
            BadgeStyle::Warning => Color32::from_rgb(33, 37, 41),
            _ => Color32::WHITE,
        }
    }
}

/// Per-slot fallback strings, shown when a field is absent or empty.
pub mod fallback {
    pub const EXTRACTED_SKILLS: &str = "No skills extracted";
    pub const MATCHING_SKILLS: &str = "No matching skills found";
    pub const MISSING_SKILLS: &str = "No missing skills identified";
    pub const EXPERIENCE: &str = "No experience information available";
    pub const EDUCATION: &str = "No education information available";
    pub const STRENGTHS: &str = "No specific strengths identified";
    pub const WEAKNESSES: &str = "No specific weaknesses identified";
    pub const OVERALL: &str = "No overall assessment available";
    pub const KEY_THEMES: &str = "No key themes identified";
    pub const POSITIVE_ASPECTS: &str = "No positive aspects identified";
    pub const CONCERNS: &str = "No concerns identified";
    pub const REASONING: &str = "No reasoning provided";
    pub const RECOMMENDATIONS: &str = "No recommendations available";
    pub const SUMMARY: &str = "No summary available";
    pub const SENTIMENT_LABEL: &str = "Unknown";
}

/// Sentiment keywords checked in order; first case-insensitive substring
/// match wins, anything unmatched gets the neutral default.
const SENTIMENT_STYLES: [(&str, BadgeStyle); 4] = [
    ("positive", BadgeStyle::Success),
    ("negative", BadgeStyle::Danger),
    ("neutral", BadgeStyle::Secondary),
    ("mixed", BadgeStyle::Warning),
];

pub fn sentiment_style(label: &str) -> BadgeStyle {
    let lower = label.to_lowercase();
    SENTIMENT_STYLES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, style)| *style)
        .unwrap_or(BadgeStyle::Secondary)
}

pub fn risk_style(level: RiskLevel) -> BadgeStyle {
    match level {
        RiskLevel::High => BadgeStyle::Danger,
        RiskLevel::Medium => BadgeStyle::Warning,
        RiskLevel::Low => BadgeStyle::Success,
        RiskLevel::Unknown => BadgeStyle::Secondary,
    }
}

/// Marker position along the sentiment track, as a percentage. Maps the
/// [-1, 1] score range onto [0, 100].
pub fn marker_position(score: f64) -> f32 {
    (((score + 1.0) / 2.0) * 100.0) as f32
}

/// The text to show for an optional field: the value when present and
/// non-blank, the slot's fallback otherwise.
pub fn display_text<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_substring_match() {
        assert_eq!(sentiment_style("Strongly Positive"), BadgeStyle::Success);
        assert_eq!(sentiment_style("Mixed Feelings"), BadgeStyle::Warning);
        assert_eq!(sentiment_style("NEGATIVE outlook"), BadgeStyle::Danger);
        assert_eq!(sentiment_style("mostly neutral"), BadgeStyle::Secondary);
    }

    #[test]
    fn test_unmatched_sentiment_is_neutral() {
        assert_eq!(sentiment_style("Ambivalent"), BadgeStyle::Secondary);
        assert_eq!(sentiment_style(""), BadgeStyle::Secondary);
    }

    #[test]
    fn test_risk_styles() {
        assert_eq!(risk_style(RiskLevel::High), BadgeStyle::Danger);
        assert_eq!(risk_style(RiskLevel::Medium), BadgeStyle::Warning);
        assert_eq!(risk_style(RiskLevel::Low), BadgeStyle::Success);
        assert_eq!(risk_style(RiskLevel::Unknown), BadgeStyle::Secondary);
    }

    #[test]
    fn test_marker_position_maps_score_range() {
        assert!((marker_position(-0.6) - 20.0).abs() < 1e-5);
        assert!((marker_position(0.0) - 50.0).abs() < 1e-5);
        assert!((marker_position(-1.0)).abs() < 1e-5);
        assert!((marker_position(1.0) - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_display_text_falls_back_on_blank() {
        assert_eq!(display_text(Some("8 years"), fallback::EXPERIENCE), "8 years");
        assert_eq!(display_text(Some("   "), fallback::EXPERIENCE), fallback::EXPERIENCE);
        assert_eq!(display_text(None, fallback::EXPERIENCE), fallback::EXPERIENCE);
    }
}
