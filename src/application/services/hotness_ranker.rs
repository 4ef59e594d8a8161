use crate::domain::entities::HotnessInput;
use std::cmp::Ordering;

/// Orders posts for the "hot" view.
///
/// `score = log10(likes) + ln(log10(id^5 + Σ comment^5))`. The formula defines
/// the observable ordering; changing exponents or bases changes which posts
/// surface first.
pub struct HotnessRanker;

impl HotnessRanker {
    /// `None` when the score is undefined: no likes, a total age of at most 1,
    /// or a NaN result. Such posts rank after every scored post.
    pub fn score(post: &HotnessInput) -> Option<f64> {
        if post.likes.is_empty() {
            return None;
        }

        let age = post.id.powi(5);
        let comment_age: f64 = post.comments.iter().map(|age| age.powi(5)).sum();
        let total_age = age + comment_age;
        if total_age.is_nan() || total_age <= 1.0 {
            return None;
        }

        let score = (post.likes.len() as f64).log10() + total_age.log10().ln();
        if score.is_nan() { None } else { Some(score) }
    }

    /// Stable sort by score, highest first; unscored entries keep their order
    /// at the end.
    pub fn rank<T>(entries: Vec<(T, Option<f64>)>) -> Vec<T> {
        let mut entries = entries;
        entries.sort_by(|(_, a), (_, b)| compare_scores(*a, *b));
        entries.into_iter().map(|(item, _)| item).collect()
    }
}

fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
