use crate::rating::format_rating;
use crate::report::{
    CommentsView, CourseDetailView, GradingView, RatingView, SavedListView, SearchView,
    SummaryView, WishListView,
};

pub fn render_saved_text(view: &SavedListView) -> String {
    let mut out = String::new();
    out.push_str("Saved courses\n");
    out.push_str("=============\n");
    if view.courses.is_empty() {
        out.push_str("(none)\n");
    }
    for (rank, course) in view.courses.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}] {} ({}) {}\n",
            rank + 1,
            course.id,
            course.name,
            course.teacher,
            format_rating(course.average)
        ));
    }
    if view.unresolved > 0 {
        out.push_str(&format!(
            "{} saved course(s) no longer in the catalog\n",
            view.unresolved
        ));
    }
    out
}

pub fn render_rating_text(view: &RatingView) -> String {
    let mut out = String::new();
    match view.course_id {
        Some(id) => out.push_str(&format!("Course {id} rating\n")),
        None => out.push_str("Rating\n"),
    }
    out.push_str(&format!(
        "Overall: {} / 5 {}\n",
        format_rating(view.overall),
        star_row(&view.overall_stars)
    ));
    for m in &view.metrics {
        out.push_str(&format!(
            "  {:<14}{} / 5 {} {:>5.1}%\n",
            m.label,
            format_rating(m.value),
            star_row(&m.stars),
            m.bar_percent
        ));
    }
    out
}

pub fn render_grading_text(view: &GradingView) -> String {
    let mut out = String::new();
    out.push_str("Grading breakdown\n");
    if view.arcs.is_empty() {
        out.push_str("(no grading items)\n");
        return out;
    }
    for a in &view.arcs {
        out.push_str(&format!(
            "  {} {}% {} {:.1}..{:.1} deg\n",
            a.arc.color, a.arc.percentage, a.arc.label, a.arc.start_angle, a.arc.end_angle
        ));
    }
    if (view.total_percentage - 100.0).abs() > 1e-9 {
        out.push_str(&format!(
            "Note: percentages sum to {}, not 100\n",
            view.total_percentage
        ));
    }
    out
}

pub fn render_search_text(view: &SearchView) -> String {
    let mut out = String::new();
    out.push_str(&format!("Search: \"{}\"\n", view.query));
    if view.results.is_empty() {
        out.push_str("No matching courses\n");
    }
    for c in &view.results {
        out.push_str(&format!(
            "  [{}] {} ({}) {} | {}\n",
            c.id,
            c.name,
            c.teacher,
            format_rating(c.average),
            c.tags.join(", ")
        ));
    }
    out
}

pub fn render_comments_text(view: &CommentsView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Comments for course {} (sorted by {})\n",
        view.course_id,
        view.sort.label()
    ));
    if view.comments.is_empty() {
        out.push_str("No comments yet\n");
    }
    for c in &view.comments {
        out.push_str(&format!(
            "  {}: {} [{}] +{} -{}\n    {}\n",
            c.user, c.title, c.date, c.likes, c.dislikes, c.content
        ));
    }
    out
}

pub fn render_summary_text(view: &SummaryView) -> String {
    let mut out = String::new();
    out.push_str(&format!("Review summary: {}\n", view.course_name));
    let Some(summary) = &view.summary else {
        out.push_str(
            "No reviews yet. Be the first to share your experience with this course.\n",
        );
        return out;
    };
    out.push_str(&format!("Based on {} review(s)\n", summary.review_count));
    for (label, value) in [
        ("Overview", &summary.overview),
        ("Audience", &summary.target_audience),
        ("Textbook", &summary.textbook),
        ("Prerequisites", &summary.prerequisites),
        ("Weekly hours", &summary.weekly_hours),
        ("Notes", &summary.notes),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("  {:<14}{}\n", label, value));
        }
    }
    out.push_str(&render_grading_text(&view.grading));
    out
}

pub fn render_detail_text(view: &CourseDetailView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} [{}]\n", view.name, view.id));
    if !view.tags.is_empty() {
        let tags: Vec<String> = view.tags.iter().map(|t| format!("#{t}")).collect();
        out.push_str(&format!("{}\n", tags.join(" ")));
    }
    out.push('\n');
    let info = &view.basic_info;
    out.push_str("Basic info\n");
    for (label, value) in [
        ("Department", &info.school_dept),
        ("Code", &info.code),
        ("Teacher", &info.teacher),
        ("Time", &info.time),
        ("Credits", &info.credits),
        ("Type", &info.course_type),
    ] {
        out.push_str(&format!("  {:<14}{}\n", label, value));
    }
    out.push('\n');
    out.push_str(&render_rating_text(&view.rating));
    out.push('\n');
    out.push_str(&render_summary_text(&view.summary));
    out.push_str(&format!("\n{} comment(s)\n", view.comment_count));
    out
}

pub fn render_wishes_text(view: &WishListView) -> String {
    let mut out = String::new();
    out.push_str("Wishing well\n");
    out.push_str("============\n");
    if view.wishes.is_empty() {
        out.push_str("(no wishes yet)\n");
    }
    for (i, wish) in view.wishes.iter().enumerate() {
        out.push_str(&format!("{}. {} ({})\n", i + 1, wish.name, wish.teacher));
    }
    out
}

fn star_row(fills: &[f64]) -> String {
    fills
        .iter()
        .map(|&f| {
            if f >= 1.0 {
                '★'
            } else if f > 0.0 {
                '◐'
            } else {
                '☆'
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
