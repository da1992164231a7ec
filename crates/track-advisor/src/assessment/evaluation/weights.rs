use super::super::domain::{Domain, DomainScores, Track, TrackScores};

/// Fixed domain-to-track contribution table, rows in domain order and columns in track order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightMatrix {
    weights: [[u32; 4]; 6],
}

const STANDARD_WEIGHTS: [[u32; 4]; 6] = [
    // stem, abm, humss, gas
    [1, 2, 3, 2], // verbal
    [3, 3, 1, 2], // numerical
    [3, 2, 1, 2], // scientific
    [3, 2, 2, 2], // abstract
    [1, 3, 1, 2], // clerical
    [1, 3, 2, 2], // entrepreneurial
];

impl WeightMatrix {
    pub const fn standard() -> Self {
        Self {
            weights: STANDARD_WEIGHTS,
        }
    }

    pub const fn weight(&self, domain: Domain, track: Track) -> u32 {
        self.weights[domain.index()][track.index()]
    }

    pub fn row_total(&self, domain: Domain) -> u32 {
        self.weights[domain.index()].iter().sum()
    }

    pub fn aggregate(&self, domain_scores: &DomainScores) -> TrackScores {
        let mut track_scores = TrackScores::default();
        for (domain, score) in domain_scores.iter() {
            for track in Track::ordered() {
                track_scores.add(track, score * self.weight(domain, track));
            }
        }
        track_scores
    }
}

impl Default for WeightMatrix {
    fn default() -> Self {
        Self::standard()
    }
}
