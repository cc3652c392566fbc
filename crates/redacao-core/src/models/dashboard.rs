//! Dashboard documents: score averages, scored history and draft list.

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::essay::{DraftRow, EssayId, ScoredEssayRow};

/// Number of characters of a draft shown in the dashboard.
pub const PREVIEW_CHARS: usize = 100;

/// Marker appended to every draft preview.
pub const PREVIEW_ELLIPSIS: &str = "...";

pub const HISTORY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DRAFT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Raw aggregates over a user's scored essays, as computed by the store.
///
/// Averages are 0 when there are no scored essays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreAverages {
    pub scored_count: u64,
    pub final_score: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    #[serde(rename = "redacoesCorrigidas")]
    pub scored_essays: u64,
    #[serde(rename = "notaMedia")]
    pub average_final: i32,
    #[serde(rename = "mediaC1")]
    pub average_c1: i32,
    #[serde(rename = "mediaC2")]
    pub average_c2: i32,
    #[serde(rename = "mediaC3")]
    pub average_c3: i32,
    #[serde(rename = "mediaC4")]
    pub average_c4: i32,
    #[serde(rename = "mediaC5")]
    pub average_c5: i32,
}

impl From<ScoreAverages> for DashboardSummary {
    fn from(avg: ScoreAverages) -> Self {
        Self {
            scored_essays: avg.scored_count,
            average_final: round_average(avg.final_score),
            average_c1: round_average(avg.c1),
            average_c2: round_average(avg.c2),
            average_c3: round_average(avg.c3),
            average_c4: round_average(avg.c4),
            average_c5: round_average(avg.c5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub id: EssayId,
    pub tema: String,
    pub nota: i32,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftEntry {
    pub id: EssayId,
    pub texto: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dashboard {
    pub sumario: DashboardSummary,
    pub historico: Vec<HistoryEntry>,
    pub rascunhos: Vec<DraftEntry>,
}

impl Dashboard {
    /// Reshape the three dashboard reads into the response document.
    ///
    /// Row order is kept as given; dates are rendered in `tz`.
    pub fn assemble(
        averages: ScoreAverages,
        scored: Vec<ScoredEssayRow>,
        drafts: Vec<DraftRow>,
        tz: &TimeZone,
    ) -> Self {
        let historico = scored
            .into_iter()
            .map(|row| HistoryEntry {
                id: row.id,
                tema: row.topic,
                nota: row.final_score,
                data: format_date(row.submitted_at, tz, HISTORY_DATE_FORMAT),
            })
            .collect();

        let rascunhos = drafts
            .into_iter()
            .map(|row| DraftEntry {
                id: row.id,
                texto: format!("{}{PREVIEW_ELLIPSIS}", row.preview),
                data: format_date(row.submitted_at, tz, DRAFT_DATE_FORMAT),
            })
            .collect();

        Self {
            sumario: averages.into(),
            historico,
            rascunhos,
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of a draft.
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Round half away from zero. Averages are never negative, so this matches
/// rounding half up.
pub fn round_average(value: f64) -> i32 {
    value.round() as i32
}

fn format_date(ts: jiff::Timestamp, tz: &TimeZone, fmt: &str) -> String {
    ts.to_zoned(tz.clone()).strftime(fmt).to_string()
}
