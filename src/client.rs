// src/client.rs
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use reqwest::blocking::{multipart, Client};
use tracing::info;

use crate::model::{ApiEnvelope, ResumeAnalysis, SentimentAnalysis};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered, but with `success: false`.
    #[error("{0}")]
    Backend(String),
    #[error("Error submitting form: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Could not read resume file: {0}")]
    File(#[from] std::io::Error),
}

/// Outcome of a request, delivered back to the UI thread. Carries the
/// generation of the submission it belongs to so stale responses can be
/// discarded.
#[derive(Debug)]
pub enum Response {
    Resume(u64, Result<ResumeAnalysis, ClientError>),
    Sentiment(u64, Result<SentimentAnalysis, ClientError>),
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Runs the resume request on a worker thread; the outcome arrives over
    /// `tx`. The UI thread never blocks on the network.
    pub fn submit_resume(
        &self,
        generation: u64,
        resume: PathBuf,
        job_description: String,
        tx: Sender<Response>,
    ) {
        let client = self.clone();
        thread::spawn(move || {
            info!(generation, "submitting resume for analysis");
            let outcome = client.analyze_resume(&resume, &job_description);
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(Response::Resume(generation, outcome));
        });
    }

    pub fn submit_sentiment(&self, generation: u64, feedback: String, tx: Sender<Response>) {
        let client = self.clone();
        thread::spawn(move || {
            info!(generation, "submitting feedback for sentiment analysis");
            let outcome = client.analyze_sentiment(&feedback);
            let _ = tx.send(Response::Sentiment(generation, outcome));
        });
    }

    fn analyze_resume(
        &self,
        resume: &Path,
        job_description: &str,
    ) -> Result<ResumeAnalysis, ClientError> {
        let form = multipart::Form::new()
            .text("job_description", job_description.to_string())
            .file("resume", resume)?;

        let envelope: ApiEnvelope<ResumeAnalysis> = self
            .http
            .post(format!("{}/analyze-resume", self.base_url))
            .header("X-Requested-With", "XMLHttpRequest")
            .multipart(form)
            .send()?
            .json()?;

        unwrap_envelope(envelope, "An error occurred during resume analysis")
    }

    fn analyze_sentiment(&self, feedback: &str) -> Result<SentimentAnalysis, ClientError> {
        let envelope: ApiEnvelope<SentimentAnalysis> = self
            .http
            .post(format!("{}/analyze-sentiment", self.base_url))
            .header("X-Requested-With", "XMLHttpRequest")
            .form(&[("feedback_text", feedback)])
            .send()?
            .json()?;

        unwrap_envelope(envelope, "An error occurred during sentiment analysis")
    }
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>, default_error: &str) -> Result<T, ClientError> {
    if envelope.success {
        envelope
            .result
            .ok_or_else(|| ClientError::Backend(default_error.to_string()))
    } else {
        Err(ClientError::Backend(
            envelope.error.unwrap_or_else(|| default_error.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_envelope_success() {
        let envelope = ApiEnvelope {
            success: true,
            result: Some(42u32),
            error: None,
        };
        assert_eq!(unwrap_envelope(envelope, "default").unwrap(), 42);
    }

    #[test]
    fn test_unwrap_envelope_backend_error() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: false,
            result: None,
            error: Some("Unsupported file format".to_string()),
        };
        let err = unwrap_envelope(envelope, "default").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file format");
    }

    #[test]
    fn test_unwrap_envelope_uses_default_message() {
        // success:false with no error string, and success:true with a
        // missing result, both surface the per-feature default.
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: false,
            result: None,
            error: None,
        };
        let err = unwrap_envelope(envelope, "An error occurred during resume analysis").unwrap_err();
        assert_eq!(err.to_string(), "An error occurred during resume analysis");

        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: true,
            result: None,
            error: None,
        };
        assert!(unwrap_envelope(envelope, "default").is_err());
    }
}
