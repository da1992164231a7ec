use serde::{Deserialize, Serialize};

use super::super::domain::{Track, TrackRecommendation, TrackScores};

/// All four tracks in recommendation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRanking {
    ordered: [TrackRecommendation; 4],
}

impl TrackRanking {
    pub fn primary(&self) -> TrackRecommendation {
        self.ordered[0]
    }

    pub fn secondary(&self) -> TrackRecommendation {
        self.ordered[1]
    }

    pub fn ordered(&self) -> &[TrackRecommendation; 4] {
        &self.ordered
    }
}

/// Sort tracks by score descending; equal scores keep canonical track order.
///
/// Shared by the submit and read paths so a stored result always re-ranks the same way.
pub fn rank(track_scores: &TrackScores) -> TrackRanking {
    let mut ordered = Track::ordered().map(|track| TrackRecommendation {
        track,
        score: track_scores.get(track),
    });

    ordered.sort_by(|left, right| {
        right
            .score
            .cmp(&left.score)
            .then_with(|| left.track.index().cmp(&right.track.index()))
    });

    TrackRanking { ordered }
}
