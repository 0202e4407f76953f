pub mod json;
pub mod text;

use serde::Serialize;

use crate::comments::{CommentSort, sort_comments};
use crate::model::{
    Course, CourseCatalog, CourseComment, CourseRatings, CourseSummary, GradingItem, WishCourse,
};
use crate::rating::arcs::{GradingArc, arc_path, percentages_to_arcs};
use crate::rating::{
    RatingWeights, STAR_COUNT, average_rating, bar_percent, clamped, star_fills,
    weighted_overall,
};
use crate::saved::SavedCourseRegistry;

/// Pie chart canvas used for the emitted SVG paths.
pub const CHART_CENTER: f64 = 50.0;
pub const CHART_RADIUS: f64 = 40.0;

/// Tags shown on the course detail page.
pub const MAX_DETAIL_TAGS: usize = 6;
/// Placeholder for basic-info fields a course does not provide.
pub const MISSING_FIELD: &str = "-";

/// One row of a course list. `average` is the plain mean of the four
/// sub-ratings, not the weighted overall.
#[derive(Debug, Clone, Serialize)]
pub struct CourseCard {
    pub id: u32,
    pub name: String,
    pub teacher: String,
    pub tags: Vec<String>,
    pub average: f64,
}

impl CourseCard {
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
            teacher: course.teacher.clone(),
            tags: course.tags.clone(),
            average: average_rating(&course.ratings),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedListView {
    pub saved_ids: Vec<u32>,
    pub courses: Vec<CourseCard>,
    /// Saved ids the catalog no longer knows.
    pub unresolved: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricView {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub bar_percent: f64,
    pub stars: [f64; STAR_COUNT],
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingView {
    pub course_id: Option<u32>,
    pub overall: f64,
    pub overall_stars: [f64; STAR_COUNT],
    pub metrics: Vec<MetricView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArcView {
    #[serde(flatten)]
    pub arc: GradingArc,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradingView {
    pub total_percentage: f64,
    pub arcs: Vec<ArcView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<CourseCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentsView {
    pub course_id: u32,
    pub sort: CommentSort,
    pub comments: Vec<CourseComment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub course_id: u32,
    pub course_name: String,
    /// `None` renders the empty "no reviews yet" state.
    pub summary: Option<CourseSummary>,
    pub grading: GradingView,
}

#[derive(Debug, Clone, Serialize)]
pub struct BasicInfoView {
    pub school_dept: String,
    pub code: String,
    pub teacher: String,
    pub time: String,
    pub credits: String,
    #[serde(rename = "type")]
    pub course_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseDetailView {
    pub id: u32,
    pub name: String,
    pub tags: Vec<String>,
    pub basic_info: BasicInfoView,
    pub rating: RatingView,
    pub summary: SummaryView,
    pub comment_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WishListView {
    pub wishes: Vec<WishCourse>,
}

pub fn build_saved_view(registry: &SavedCourseRegistry, catalog: &CourseCatalog) -> SavedListView {
    let saved_ids = registry.ordered_ids();
    let courses = registry
        .resolve_catalog(catalog)
        .into_iter()
        .map(CourseCard::from_course)
        .collect::<Vec<_>>();
    SavedListView {
        unresolved: saved_ids.len() - courses.len(),
        saved_ids,
        courses,
    }
}

pub fn build_rating_view(
    course_id: Option<u32>,
    ratings: &CourseRatings,
    weights: &RatingWeights,
) -> RatingView {
    let r = clamped(ratings);
    let overall = weighted_overall(ratings, weights);
    let metric = |key: &'static str, label: &'static str, value: f64| MetricView {
        key,
        label,
        value,
        bar_percent: bar_percent(value),
        stars: star_fills(value),
    };
    RatingView {
        course_id,
        overall,
        overall_stars: star_fills(overall),
        metrics: vec![
            metric("reward", "Reward", r.reward),
            metric("score", "Score", r.score),
            metric("easiness", "Easiness", r.easiness),
            metric("teacherStyle", "Teacher style", r.teacher_style),
        ],
    }
}

pub fn build_grading_view(items: &[GradingItem]) -> GradingView {
    let arcs = percentages_to_arcs(items)
        .into_iter()
        .map(|arc| {
            let path = arc_path(&arc, CHART_CENTER, CHART_CENTER, CHART_RADIUS);
            ArcView { arc, path }
        })
        .collect();
    GradingView {
        total_percentage: items.iter().map(|i| i.percentage).sum(),
        arcs,
    }
}

pub fn build_search_view(catalog: &CourseCatalog, query: &str) -> SearchView {
    SearchView {
        query: query.trim().to_string(),
        results: catalog
            .search(query)
            .into_iter()
            .map(CourseCard::from_course)
            .collect(),
    }
}

pub fn build_comments_view(course: &Course, sort: CommentSort) -> CommentsView {
    CommentsView {
        course_id: course.id,
        sort,
        comments: sort_comments(&course.comments, sort)
            .into_iter()
            .cloned()
            .collect(),
    }
}

pub fn build_summary_view(course: &Course) -> SummaryView {
    SummaryView {
        course_id: course.id,
        course_name: course.name.clone(),
        summary: course.summary.clone(),
        grading: build_grading_view(course.grading_items()),
    }
}

pub fn build_basic_info_view(course: &Course) -> BasicInfoView {
    let or_missing = |field: &Option<String>| {
        field
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(MISSING_FIELD)
            .to_string()
    };
    BasicInfoView {
        school_dept: or_missing(&course.school_dept),
        code: or_missing(&course.code),
        teacher: course.teacher.clone(),
        time: or_missing(&course.time),
        credits: course
            .credits
            .map_or_else(|| MISSING_FIELD.to_string(), |c| c.to_string()),
        course_type: or_missing(&course.course_type),
    }
}

pub fn build_detail_view(course: &Course, weights: &RatingWeights) -> CourseDetailView {
    CourseDetailView {
        id: course.id,
        name: course.name.clone(),
        tags: course.tags.iter().take(MAX_DETAIL_TAGS).cloned().collect(),
        basic_info: build_basic_info_view(course),
        rating: build_rating_view(Some(course.id), &course.ratings, weights),
        summary: build_summary_view(course),
        comment_count: course.comments.len(),
    }
}

pub fn build_wish_list_view(wishes: &[WishCourse]) -> WishListView {
    WishListView {
        wishes: wishes.to_vec(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
