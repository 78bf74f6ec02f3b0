use crate::age_in_months;
use app_state::RecommendationSettings;
use common_types::Photo;

/// A pool photo together with its relevance to the target.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub photo: &'a Photo,
    pub score: u32,
}

/// Lowercased, leading `#` removed.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim_start_matches('#').to_lowercase()
}

/// Relevance of `candidate` for a target at `target_location` / `target_age`.
///
/// `tags` must already be normalized. The age contribution only applies when
/// both ages are known.
#[must_use]
pub fn score_candidate(
    target_location: &str,
    target_age: Option<u32>,
    candidate: &Photo,
    tags: &[String],
    settings: &RecommendationSettings,
) -> u32 {
    let mut score = 0;

    if candidate.location == target_location {
        score += settings.location_weight;
    }

    let candidate_age = age_in_months(candidate.growing_time.as_ref(), settings.birth_date);
    if let (Some(target_age), Some(candidate_age)) = (target_age, candidate_age) {
        if target_age.abs_diff(candidate_age) <= settings.age_window_months {
            score += settings.age_weight;
        }
    }

    let detail = candidate.instructions.to_lowercase();
    let matching_tags = tags
        .iter()
        .filter(|tag| !tag.is_empty() && detail.contains(tag.as_str()))
        .count();
    score + settings.tag_weight * matching_tags as u32
}

/// Scores every photo in `pool` except the target itself.
///
/// Highest score first. Equal scores keep their pool order.
#[must_use]
pub fn rank_candidates<'a>(
    target: &Photo,
    pool: &'a [Photo],
    suggested_tags: &[String],
    settings: &RecommendationSettings,
) -> Vec<ScoredCandidate<'a>> {
    let tags: Vec<String> = suggested_tags.iter().map(|t| normalize_tag(t)).collect();
    let target_age = age_in_months(target.growing_time.as_ref(), settings.birth_date);

    let mut scored: Vec<ScoredCandidate<'a>> = pool
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| ScoredCandidate {
            photo: candidate,
            score: score_candidate(&target.location, target_age, candidate, &tags, settings),
        })
        .collect();
    // `sort_by` is stable, ties stay in pool order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// The `max_related` best candidates for `target`.
#[must_use]
pub fn find_related_photos(
    target: &Photo,
    pool: &[Photo],
    suggested_tags: &[String],
    settings: &RecommendationSettings,
) -> Vec<Photo> {
    rank_candidates(target, pool, suggested_tags, settings)
        .into_iter()
        .take(settings.max_related)
        .map(|scored| scored.photo.clone())
        .collect()
}
