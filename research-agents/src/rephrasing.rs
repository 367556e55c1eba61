//! Rephrasing decorator - fans one question out into three phrasings
//!
//! The wrapped strategy runs once per phrasing and the three reports are
//! merged into a single labeled document. Sub-research calls run
//! concurrently, but the merge order is always original, negated, universal.

use crate::collaborators::Rephraser;
use crate::strategy::ResearchStrategy;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

pub const ORIGINAL_LABEL: &str = "Research based on the question";
pub const NEGATED_LABEL: &str = "Research based on the negated question";
pub const UNIVERSAL_LABEL: &str = "Research based on the universal search query";

/// Join labeled reports, skipping soft failures
///
/// Returns an empty string when every report is missing.
pub fn merge_reports(reports: &[(&str, Option<String>)]) -> String {
    reports
        .iter()
        .filter_map(|(label, report)| {
            report
                .as_ref()
                .map(|text| format!("### {}\n\n{}", label, text))
        })
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// Research strategy that wraps another one with question rephrasing
pub struct RephrasingResearch {
    inner: Arc<dyn ResearchStrategy>,
    rephraser: Arc<dyn Rephraser>,
}

impl RephrasingResearch {
    pub fn new(inner: Arc<dyn ResearchStrategy>, rephraser: Arc<dyn Rephraser>) -> Self {
        Self { inner, rephraser }
    }
}

#[async_trait]
impl ResearchStrategy for RephrasingResearch {
    /// Always `Some`, even when every sub-research failed
    async fn research(&self, question: &str) -> Option<String> {
        let questions = self.rephraser.rephrase(question).await;
        debug!(
            "Rephrased question into negated {:?} and open-ended {:?}",
            questions.negated_question, questions.open_ended_question
        );

        let (original, negated, universal) = futures::join!(
            self.inner.research(&questions.original_question),
            self.inner.research(&questions.negated_question),
            self.inner.research(&questions.open_ended_question),
        );

        let reports = [
            (ORIGINAL_LABEL, original),
            (NEGATED_LABEL, negated),
            (UNIVERSAL_LABEL, universal),
        ];
        let succeeded = reports.iter().filter(|(_, r)| r.is_some()).count();
        info!("Rephrased research succeeded for {}/3 phrasings", succeeded);

        Some(merge_reports(&reports))
    }
}
