// src/state/mod.rs
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::model::{ResumeAnalysis, SentimentAnalysis};

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    ResumeScreening,
    SentimentAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Danger,
}

/// A transient alert. Expires after a few seconds or on manual dismissal.
#[derive(Debug)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    created: Instant,
}

const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            created: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_LIFETIME
    }
}

#[derive(Debug, Default)]
pub struct ResumeForm {
    pub file: Option<PathBuf>,
    pub job_description: String,
}

#[derive(Debug, Default)]
pub struct SentimentForm {
    pub feedback_text: String,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Form input
    pub resume_form: ResumeForm,
    pub sentiment_form: SentimentForm,

    // Latest successful results; None hides the result section
    pub resume_result: Option<ResumeAnalysis>,
    pub sentiment_result: Option<SentimentAnalysis>,

    // Minimal UI state
    pub current_screen: Screen,
    pub notices: Vec<Notice>,
    pub in_flight: bool,

    // Submission tracking: responses from earlier generations are stale
    generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            resume_form: ResumeForm::default(),
            sentiment_form: SentimentForm::default(),
            resume_result: None,
            sentiment_result: None,
            current_screen: Screen::ResumeScreening,
            notices: Vec::new(),
            in_flight: false,
            generation: 0,
        }
    }

    pub fn push_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push(Notice::new(kind, message));
    }

    pub fn prune_notices(&mut self) {
        self.notices.retain(|notice| !notice.expired());
    }

    /// Starts a new submission and returns its generation.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.generation
    }

    /// True when a response belongs to the latest submission. Overlapping
    /// submissions resolve last-submitted-wins: only the newest generation
    /// is ever bound to the result section.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_are_monotonic() {
        let mut state = AppState::new();
        let first = state.next_generation();
        let second = state.next_generation();
        assert!(second > first);
        assert!(state.in_flight);
    }

    #[test]
    fn test_stale_responses_are_not_current() {
        let mut state = AppState::new();
        let first = state.next_generation();
        let second = state.next_generation();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_fresh_notice_is_not_expired() {
        let notice = Notice::new(NoticeKind::Danger, "Please enter a job description");
        assert!(!notice.expired());
    }
}
