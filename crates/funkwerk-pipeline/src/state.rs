// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan-session state machine.
//
// The embedding UI tracks exactly four states; the session owns the
// transitions so no collaborator ever invents a fifth.

use funkwerk_core::capability::{PayloadRenderer, TextExtractor};
use funkwerk_core::error::{FunkwerkError, Result};
use funkwerk_core::types::{FailureReason, ProvisionedNetwork, ScanOutcome, ScanReport};

use crate::pipeline::ScanPipeline;

/// Where the current submission stands.
#[derive(Debug, Clone)]
pub enum ScanState {
    /// Nothing in flight; ready for a submission.
    Idle,
    /// A submission is being processed.
    Scanning,
    /// The last submission produced a join-ready network.
    Succeeded(ProvisionedNetwork),
    /// The last submission failed; resubmitting a new image is the retry.
    Failed(FailureReason),
}

impl ScanState {
    pub fn is_scanning(&self) -> bool {
        matches!(self, Self::Scanning)
    }

    /// The provisioned network, when the last scan succeeded.
    pub fn network(&self) -> Option<&ProvisionedNetwork> {
        match self {
            Self::Succeeded(n) => Some(n),
            _ => None,
        }
    }
}

/// A pipeline plus the state of its current submission.
///
/// Overlapping submissions have no defined merge semantics, so `submit`
/// refuses them outright with [`FunkwerkError::ScanInProgress`]; the
/// collaborator disables resubmission until the current scan resolves. If a
/// submission future is dropped mid-flight the state stays `Scanning` —
/// there is no cancellation path — and [`reset`](Self::reset) recovers.
pub struct ScanSession<X, R> {
    pipeline: ScanPipeline<X, R>,
    state: ScanState,
}

impl<X: TextExtractor, R: PayloadRenderer> ScanSession<X, R> {
    pub fn new(pipeline: ScanPipeline<X, R>) -> Self {
        Self {
            pipeline,
            state: ScanState::Idle,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Run one submission through the pipeline, tracking state.
    pub async fn submit(&mut self, image: &[u8]) -> Result<ScanReport> {
        if self.state.is_scanning() {
            return Err(FunkwerkError::ScanInProgress);
        }

        self.state = ScanState::Scanning;
        let result = self.pipeline.scan(image).await;

        self.state = match &result {
            Ok(report) => match &report.outcome {
                ScanOutcome::Provisioned(network) => ScanState::Succeeded(network.clone()),
                ScanOutcome::Failed(reason) => ScanState::Failed(*reason),
            },
            Err(_) => ScanState::Idle,
        };

        result
    }

    /// Return to `Idle`, discarding the last result.
    pub fn reset(&mut self) {
        self.state = ScanState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::{BrokenExtractor, EchoRenderer, FixedText};

    fn session(text: &'static str) -> ScanSession<FixedText, EchoRenderer> {
        ScanSession::new(ScanPipeline::new(FixedText(text), EchoRenderer))
    }

    #[tokio::test]
    async fn success_transitions_idle_to_succeeded() {
        let mut session = session("SSID: Attic\nPassword: pw\n");
        assert!(matches!(session.state(), ScanState::Idle));

        session.submit(b"img").await.unwrap();
        let network = session.state().network().expect("should have succeeded");
        assert_eq!(network.credentials.ssid, "Attic");
    }

    #[tokio::test]
    async fn failure_transitions_to_failed_and_allows_retry() {
        let mut session =
            ScanSession::new(ScanPipeline::new(BrokenExtractor, EchoRenderer));

        session.submit(b"img").await.unwrap();
        assert!(matches!(
            session.state(),
            ScanState::Failed(FailureReason::ExtractorError)
        ));

        // A failed session accepts the next submission (manual retry).
        let report = session.submit(b"img2").await.unwrap();
        assert!(matches!(report.outcome, ScanOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn reset_returns_to_idle() {
        let mut session = session("gibberish");
        session.submit(b"img").await.unwrap();
        assert!(matches!(session.state(), ScanState::Failed(_)));

        session.reset();
        assert!(matches!(session.state(), ScanState::Idle));
    }

    #[tokio::test]
    async fn succeeded_session_accepts_a_new_submission() {
        let mut session = session("Network: Cafe\nKey: espresso\n");
        session.submit(b"one").await.unwrap();
        assert!(session.state().network().is_some());

        let report = session.submit(b"two").await.unwrap();
        assert!(report.outcome.is_provisioned());
    }
}
