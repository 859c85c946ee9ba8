//! Profile statistics.
//!
//! Radar scores are derived from whichever sessions the profile view is
//! filtered to. The per-exercise tally always covers the whole log since it
//! feeds the summary cards, which stay visible regardless of the filter.
//!
//! Percentages are rounded half away from zero (`f64::round`).

use serde::Serialize;

use super::types::{ExerciseType, RadarStat, SessionResult, TrainingSession};

/// Consistency score reported whenever at least one session exists.
///
/// Stand-in until a variance-based measure is agreed on.
pub const CONSISTENCY_PLACEHOLDER: u8 = 85;

/// Commitment score reported whenever at least one session exists.
///
/// Stand-in until a frequency-based measure is agreed on.
pub const COMMITMENT_PLACEHOLDER: u8 = 90;

/// Upper bound of every radar axis.
pub const RADAR_FULL_MARK: u8 = 100;

/// The four normalized profile scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RadarScores {
    /// Share of correct repetitions
    pub accuracy: u8,
    /// Share of sessions rated Excellent
    pub mastery: u8,
    /// Form stability
    pub consistency: u8,
    /// Training engagement
    pub commitment: u8,
}

impl RadarScores {
    /// Chart records in axis order: accuracy, mastery, consistency, commitment.
    pub fn radar_stats(&self) -> Vec<RadarStat> {
        [
            ("Accuracy", self.accuracy),
            ("Mastery", self.mastery),
            ("Consistency", self.consistency),
            ("Commitment", self.commitment),
        ]
        .into_iter()
        .map(|(subject, value)| RadarStat {
            subject: subject.to_string(),
            value,
            full_mark: RADAR_FULL_MARK,
        })
        .collect()
    }
}

/// Compute radar scores over a set of sessions.
///
/// Total over every input including the empty set, which scores all zeros.
pub fn aggregate<'a, I>(sessions: I) -> RadarScores
where
    I: IntoIterator<Item = &'a TrainingSession>,
{
    let mut count: u64 = 0;
    let mut total_correct: u64 = 0;
    let mut total_errors: u64 = 0;
    let mut excellent: u64 = 0;

    for session in sessions {
        count += 1;
        total_correct += u64::from(session.correct_count);
        total_errors += u64::from(session.error_count);
        if session.result == SessionResult::Excellent {
            excellent += 1;
        }
    }

    let total_moves = (total_correct + total_errors).max(1);
    let accuracy = percentage(total_correct, total_moves);
    let mastery = percentage(excellent, count.max(1));

    let (consistency, commitment) = if count > 0 {
        (CONSISTENCY_PLACEHOLDER, COMMITMENT_PLACEHOLDER)
    } else {
        (0, 0)
    };

    RadarScores {
        accuracy,
        mastery,
        consistency,
        commitment,
    }
}

/// `round(100 * part / whole)`, with `part <= whole` and `whole > 0`.
fn percentage(part: u64, whole: u64) -> u8 {
    let pct = (100.0 * part as f64 / whole as f64).round();
    pct.clamp(0.0, f64::from(RADAR_FULL_MARK)) as u8
}

/// Correct and erroneous repetitions for one exercise type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExerciseTally {
    /// Correct repetitions
    pub correct: u64,
    /// Repetitions with form errors
    pub errors: u64,
}

/// Repetition totals per exercise type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SummaryTally {
    tallies: [ExerciseTally; ExerciseType::COUNT],
}

impl SummaryTally {
    /// Accumulate every session into its exercise bucket.
    pub fn from_sessions<'a, I>(sessions: I) -> Self
    where
        I: IntoIterator<Item = &'a TrainingSession>,
    {
        let mut summary = Self::default();
        for session in sessions {
            let tally = &mut summary.tallies[session.exercise.index()];
            tally.correct += u64::from(session.correct_count);
            tally.errors += u64::from(session.error_count);
        }
        summary
    }

    /// Totals for one exercise type.
    pub fn get(&self, exercise: ExerciseType) -> ExerciseTally {
        self.tallies[exercise.index()]
    }

    /// Totals for every exercise type in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ExerciseType, ExerciseTally)> + '_ {
        ExerciseType::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}
