use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rubric::Competency;

/// Feedback stored on drafts in place of a model analysis.
pub const DRAFT_FEEDBACK: &str = "Rascunho salvo. Aguardando correção.";

/// A model's verdict on one essay.
///
/// Field names on the wire match the JSON the model is asked to produce, so
/// the same value is parsed from the model, persisted and returned to the
/// caller unchanged. `final_score` is expected to equal the sum of the five
/// competencies but this is never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    #[serde(rename = "nota_final")]
    pub final_score: i32,
    #[serde(rename = "c1_score")]
    pub c1: i32,
    #[serde(rename = "c2_score")]
    pub c2: i32,
    #[serde(rename = "c3_score")]
    pub c3: i32,
    #[serde(rename = "c4_score")]
    pub c4: i32,
    #[serde(rename = "c5_score")]
    pub c5: i32,
    #[serde(rename = "feedback_detalhado")]
    pub feedback: String,
}

impl ScoringResult {
    /// The zeroed scores a draft is stored with.
    pub fn draft() -> Self {
        Self {
            final_score: 0,
            c1: 0,
            c2: 0,
            c3: 0,
            c4: 0,
            c5: 0,
            feedback: DRAFT_FEEDBACK.to_string(),
        }
    }

    pub fn competency(&self, competency: Competency) -> i32 {
        match competency {
            Competency::C1 => self.c1,
            Competency::C2 => self.c2,
            Competency::C3 => self.c3,
            Competency::C4 => self.c4,
            Competency::C5 => self.c5,
        }
    }

    pub fn competency_sum(&self) -> i32 {
        Competency::ALL.iter().map(|c| self.competency(*c)).sum()
    }

    /// Whether the final score matches the sum of the competencies.
    pub fn is_consistent(&self) -> bool {
        self.final_score == self.competency_sum()
    }

    /// Drafts are told apart from scored essays by a zero final score.
    pub fn is_draft(&self) -> bool {
        self.final_score == 0
    }
}
