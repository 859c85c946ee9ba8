//! Profile view projection.
//!
//! Everything the profile screen shows for one selector value, recomputed from
//! scratch whenever the caller asks for it.

use super::aggregator::{aggregate, RadarScores, SummaryTally};
use super::filter::{filter_sessions, SessionSelector};
use super::types::{TrainingSession, UserProfileData};

/// Derived statistics for a profile under one selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot<'a> {
    /// Selector the snapshot was computed for
    pub selector: SessionSelector,
    /// Sessions passing the selector, in log order
    pub sessions: Vec<&'a TrainingSession>,
    /// Radar scores over `sessions`
    pub scores: RadarScores,
    /// Per-exercise totals over the whole log
    pub tally: SummaryTally,
}

impl<'a> ProfileSnapshot<'a> {
    /// Compute the snapshot for `selector`.
    pub fn compute(profile: &'a UserProfileData, selector: SessionSelector) -> Self {
        let sessions = filter_sessions(&profile.sessions, selector);
        let scores = aggregate(sessions.iter().copied());
        let tally = SummaryTally::from_sessions(&profile.sessions);

        Self {
            selector,
            sessions,
            scores,
            tally,
        }
    }

    /// Whether no session passed the selector.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
