// src/model.rs
use serde::Deserialize;

/// JSON envelope returned by both analysis endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of a resume-vs-job-description screening.
///
/// Every field is optional on the wire; missing fields deserialize to their
/// defaults and the binder substitutes per-slot fallback text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub extracted_skills: Vec<String>,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub experience_summary: Option<String>,
    #[serde(default)]
    pub education_summary: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub overall_assessment: Option<String>,
}

/// Result of an employee-feedback sentiment analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentAnalysis {
    /// Score in [-1, 1].
    #[serde(default)]
    pub sentiment_score: f64,
    #[serde(default)]
    pub primary_sentiment: Option<String>,
    #[serde(default)]
    pub key_themes: Vec<String>,
    #[serde(default)]
    pub positive_aspects: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub attrition_risk: Option<AttritionRisk>,
    #[serde(default)]
    pub engagement_recommendations: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttritionRisk {
    #[serde(default)]
    pub level: RiskLevel,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    /// Numeric proxy used for band lookup and gauge fill.
    pub fn proxy_value(self) -> f64 {
        match self {
            RiskLevel::Low => 20.0,
            RiskLevel::Medium => 50.0,
            RiskLevel::High => 80.0,
            RiskLevel::Unknown => 0.0,
        }
    }

    /// Capitalized display name for the gauge label and badge.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }
}
