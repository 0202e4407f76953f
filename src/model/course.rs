use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Four sub-ratings of a course, each nominally in `[0, 5]`.
///
/// Producers do not guarantee the range; every consumer clamps through
/// [`crate::rating::clamp_rating`] before using a value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRatings {
    pub reward: f64,
    pub score: f64,
    pub easiness: f64,
    pub teacher_style: f64,
}

impl CourseRatings {
    pub fn new(reward: f64, score: f64, easiness: f64, teacher_style: f64) -> Self {
        Self {
            reward,
            score,
            easiness,
            teacher_style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingItem {
    pub label: String,
    pub percentage: f64,
}

impl GradingItem {
    pub fn new(label: impl Into<String>, percentage: f64) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }
}

/// Parses `label=percentage`; a trailing `%` is accepted.
impl FromStr for GradingItem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidGradingItem(s.to_string());
        let (label, pct) = s.rsplit_once('=').ok_or_else(invalid)?;
        let label = label.trim();
        if label.is_empty() {
            return Err(invalid());
        }
        let percentage: f64 = pct
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|_| invalid())?;
        if !percentage.is_finite() {
            return Err(invalid());
        }
        Ok(Self::new(label, percentage))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseComment {
    pub id: u32,
    pub user: String,
    pub title: String,
    pub content: String,
    /// `YYYY-MM-DD`; lexical order equals chronological order.
    pub date: String,
    pub likes: u32,
    pub dislikes: u32,
}

/// Review digest attached to a course once it has reviews.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseSummary {
    pub overview: String,
    pub target_audience: String,
    pub textbook: String,
    pub prerequisites: String,
    pub weekly_hours: String,
    pub grading_items: Vec<GradingItem>,
    pub notes: String,
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub teacher: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ratings: CourseRatings,
    #[serde(default)]
    pub school_dept: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub credits: Option<u32>,
    #[serde(default, rename = "type")]
    pub course_type: Option<String>,
    /// `None` until the course has been reviewed.
    #[serde(default)]
    pub summary: Option<CourseSummary>,
    #[serde(default)]
    pub comments: Vec<CourseComment>,
}

impl Course {
    /// A course without the optional basic info, summary or comments.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        teacher: impl Into<String>,
        ratings: CourseRatings,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            teacher: teacher.into(),
            tags: Vec::new(),
            ratings,
            school_dept: None,
            code: None,
            time: None,
            credits: None,
            course_type: None,
            summary: None,
            comments: Vec::new(),
        }
    }

    /// Grading breakdown from the summary; empty for unreviewed courses.
    pub fn grading_items(&self) -> &[GradingItem] {
        self.summary
            .as_ref()
            .map(|s| s.grading_items.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/course.rs"]
mod tests;
