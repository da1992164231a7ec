use crate::assessment::domain::{DomainScores, Track, TrackRecommendation, TrackScores};
use crate::assessment::evaluation::{explain, rank, top_domains};
use crate::assessment::Domain;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scores(stem: u32, abm: u32, humss: u32, gas: u32) -> TrackScores {
    TrackScores {
        stem,
        abm,
        humss,
        gas,
    }
}

#[test]
fn rank_orders_by_score_descending() {
    let ranking = rank(&scores(10, 40, 25, 30));

    let order: Vec<Track> = ranking.ordered().iter().map(|entry| entry.track).collect();
    assert_eq!(order, vec![Track::Abm, Track::Gas, Track::Humss, Track::Stem]);
    assert_eq!(
        ranking.primary(),
        TrackRecommendation {
            track: Track::Abm,
            score: 40
        }
    );
}

#[test]
fn rank_breaks_ties_by_canonical_order() {
    let ranking = rank(&scores(5, 9, 9, 9));

    assert_eq!(ranking.primary().track, Track::Abm);
    assert_eq!(ranking.secondary().track, Track::Humss);
    assert_eq!(ranking.ordered()[3].track, Track::Stem);
}

#[test]
fn all_zero_scores_rank_stem_then_abm() {
    let ranking = rank(&TrackScores::default());

    assert_eq!(ranking.primary().track, Track::Stem);
    assert_eq!(ranking.secondary().track, Track::Abm);
    assert_eq!(ranking.primary().score, 0);
}

#[test]
fn primary_and_secondary_dominate_remaining_tracks() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let track_scores = scores(
            rng.gen_range(0..6),
            rng.gen_range(0..6),
            rng.gen_range(0..6),
            rng.gen_range(0..6),
        );

        let ranking = rank(&track_scores);
        let ordered = ranking.ordered();

        assert!(ranking.primary().score >= ranking.secondary().score);
        for entry in &ordered[2..] {
            assert!(ranking.secondary().score >= entry.score);
        }
        for pair in ordered.windows(2) {
            if pair[0].score == pair[1].score {
                assert!(pair[0].track.index() < pair[1].track.index());
            }
        }
        assert_eq!(rank(&track_scores), ranking);
    }
}

#[test]
fn top_domains_prefers_canonical_order_on_ties() {
    let domain_scores = DomainScores {
        verbal: 2,
        numerical: 5,
        scientific: 2,
        r#abstract: 5,
        clerical: 2,
        entrepreneurial: 0,
    };

    let top = top_domains(&domain_scores, 3);

    assert_eq!(top, vec![Domain::Numerical, Domain::Abstract, Domain::Verbal]);
}

#[test]
fn explanation_has_three_sentences() {
    let domain_scores = DomainScores {
        numerical: 8,
        scientific: 6,
        r#abstract: 7,
        ..DomainScores::default()
    };
    let track_scores = scores(63, 44, 27, 42);
    let primary = rank(&track_scores).primary();

    let path = explain(&domain_scores, &track_scores, &primary);

    assert_eq!(path.len(), 3);
    assert_eq!(
        path[0],
        "Highest aptitude scores observed in domains: numerical, abstract, scientific."
    );
    assert_eq!(
        path[1],
        "Track scores: STEM: 63, ABM: 44, HUMSS: 27, GAS: 42."
    );
    assert!(path[2].starts_with("STEM is recommended"));
}

#[test]
fn explanation_rationale_follows_primary_track() {
    let domain_scores = DomainScores::default();
    let track_scores = TrackScores::default();

    for (track, prefix) in [
        (Track::Stem, "STEM"),
        (Track::Abm, "ABM"),
        (Track::Humss, "HUMSS"),
        (Track::Gas, "GAS"),
    ] {
        let primary = TrackRecommendation { track, score: 0 };
        let path = explain(&domain_scores, &track_scores, &primary);
        assert_eq!(path.len(), 3);
        assert!(path[2].starts_with(prefix), "{track:?}: {}", path[2]);
    }
}

#[test]
fn explanation_with_all_zero_scores_lists_first_three_domains() {
    let path = explain(
        &DomainScores::default(),
        &TrackScores::default(),
        &rank(&TrackScores::default()).primary(),
    );

    assert_eq!(
        path[0],
        "Highest aptitude scores observed in domains: verbal, numerical, scientific."
    );
}
