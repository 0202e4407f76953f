pub mod arcs;

use crate::model::CourseRatings;

pub const RATING_MAX: f64 = 5.0;
pub const STAR_COUNT: usize = 5;

/// Contribution of each sub-rating to the overall score. The default
/// weights sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingWeights {
    pub reward: f64,
    pub score: f64,
    pub easiness: f64,
    pub teacher_style: f64,
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            reward: 0.35,
            score: 0.20,
            easiness: 0.15,
            teacher_style: 0.30,
        }
    }
}

pub fn clamp_rating(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, RATING_MAX)
}

/// Clamps every sub-rating into `[0, 5]`.
pub fn clamped(ratings: &CourseRatings) -> CourseRatings {
    CourseRatings {
        reward: clamp_rating(ratings.reward),
        score: clamp_rating(ratings.score),
        easiness: clamp_rating(ratings.easiness),
        teacher_style: clamp_rating(ratings.teacher_style),
    }
}

/// Weighted sum of the clamped sub-ratings, unrounded.
pub fn weighted_overall_raw(ratings: &CourseRatings, weights: &RatingWeights) -> f64 {
    let r = clamped(ratings);
    r.reward * weights.reward
        + r.score * weights.score
        + r.easiness * weights.easiness
        + r.teacher_style * weights.teacher_style
}

/// Weighted overall score rounded half-up to one decimal.
pub fn weighted_overall(ratings: &CourseRatings, weights: &RatingWeights) -> f64 {
    round_half_up_1(weighted_overall_raw(ratings, weights))
}

/// Plain mean of the clamped sub-ratings, rounded half-up to one decimal.
/// Course cards and list rows show this instead of the weighted score.
pub fn average_rating(ratings: &CourseRatings) -> f64 {
    let r = clamped(ratings);
    round_half_up_1((r.reward + r.score + r.easiness + r.teacher_style) / 4.0)
}

pub fn round_half_up_1(x: f64) -> f64 {
    // epsilon absorbs binary noise such as 0.15 * 10 landing on 1.4999...
    (x * 10.0 + 0.5 + 1e-9).floor() / 10.0
}

pub fn format_rating(x: f64) -> String {
    format!("{:.1}", x)
}

/// Fill fraction of each star in a five-star row.
pub fn star_fills(rating: f64) -> [f64; STAR_COUNT] {
    let r = clamp_rating(rating);
    let mut fills = [0.0; STAR_COUNT];
    for (i, fill) in fills.iter_mut().enumerate() {
        *fill = (r - i as f64).clamp(0.0, 1.0);
    }
    fills
}

/// Width of a progress bar, in percent of full.
pub fn bar_percent(rating: f64) -> f64 {
    clamp_rating(rating) / RATING_MAX * 100.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/rating/tests.rs"]
mod tests;
