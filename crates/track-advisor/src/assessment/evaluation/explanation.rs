use super::super::domain::{Domain, DomainScores, Track, TrackRecommendation, TrackScores};

const TOP_DOMAIN_COUNT: usize = 3;

/// Build the three-sentence decision path for a recommendation.
pub fn explain(
    domain_scores: &DomainScores,
    track_scores: &TrackScores,
    primary: &TrackRecommendation,
) -> Vec<String> {
    let strongest = top_domains(domain_scores, TOP_DOMAIN_COUNT)
        .into_iter()
        .map(Domain::tag)
        .collect::<Vec<_>>()
        .join(", ");

    let snapshot = track_scores
        .iter()
        .map(|(track, score)| format!("{}: {}", track.label(), score))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("Highest aptitude scores observed in domains: {strongest}."),
        format!("Track scores: {snapshot}."),
        rationale(primary.track).to_string(),
    ]
}

/// Domains ordered by score descending, ties kept in canonical domain order.
pub fn top_domains(domain_scores: &DomainScores, count: usize) -> Vec<Domain> {
    let mut ranked = Domain::ordered();
    // stable sort keeps canonical order among equal scores
    ranked.sort_by(|left, right| domain_scores.get(*right).cmp(&domain_scores.get(*left)));
    ranked.into_iter().take(count).collect()
}

const fn rationale(track: Track) -> &'static str {
    match track {
        Track::Stem => {
            "STEM is recommended because you showed strong performance in numerical, scientific, and abstract reasoning domains."
        }
        Track::Abm => {
            "ABM is recommended because you performed well in numerical, clerical, and entrepreneurial domains related to business and management."
        }
        Track::Humss => {
            "HUMSS is recommended because of your strengths in verbal, social, and communication-related domains."
        }
        Track::Gas => {
            "GAS is recommended as a flexible track because your aptitude profile is balanced across multiple domains."
        }
    }
}
