//! The five ENEM competencies and their score bounds.

/// Upper bound of a single competency score.
pub const MAX_COMPETENCY_SCORE: i32 = 200;

/// Upper bound of the final score (five competencies at 200 each).
pub const MAX_FINAL_SCORE: i32 = MAX_COMPETENCY_SCORE * Competency::ALL.len() as i32;

/// One rubric dimension an essay is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competency {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl Competency {
    pub const ALL: [Competency; 5] = [
        Competency::C1,
        Competency::C2,
        Competency::C3,
        Competency::C4,
        Competency::C5,
    ];

    /// 1-based position in the rubric.
    pub fn number(self) -> u8 {
        match self {
            Competency::C1 => 1,
            Competency::C2 => 2,
            Competency::C3 => 3,
            Competency::C4 => 4,
            Competency::C5 => 5,
        }
    }

    /// Wire and column name of this competency's score.
    pub fn field(self) -> &'static str {
        match self {
            Competency::C1 => "c1_score",
            Competency::C2 => "c2_score",
            Competency::C3 => "c3_score",
            Competency::C4 => "c4_score",
            Competency::C5 => "c5_score",
        }
    }

    /// What the competency evaluates, as worded for the grader.
    pub fn description(self) -> &'static str {
        match self {
            Competency::C1 => "Domínio da norma padrão",
            Competency::C2 => "Compreensão da proposta",
            Competency::C3 => "Seleção e organização de informações",
            Competency::C4 => "Demonstração de conhecimento e coesão",
            Competency::C5 => "Elaboração de proposta de intervenção",
        }
    }
}
