use super::*;
use crate::rating::arcs::START_ANGLE_DEG;

#[test]
fn test_saved_view_counts_unresolved() {
    let catalog = CourseCatalog::builtin();
    let registry = SavedCourseRegistry::with_ids([5, 77, 1]);
    let view = build_saved_view(&registry, &catalog);
    assert_eq!(view.saved_ids, vec![5, 77, 1]);
    assert_eq!(
        view.courses.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![5, 1]
    );
    assert_eq!(view.unresolved, 1);
}

#[test]
fn test_rating_view_clamps_metrics() {
    let ratings = CourseRatings::new(6.0, 5.5, 7.0, 5.2);
    let view = build_rating_view(None, &ratings, &RatingWeights::default());
    assert_eq!(view.overall, 5.0);
    assert_eq!(view.metrics.len(), 4);
    for m in &view.metrics {
        assert_eq!(m.value, 5.0);
        assert_eq!(m.bar_percent, 100.0);
        assert_eq!(m.stars, [1.0; 5]);
    }
}

#[test]
fn test_rating_view_for_course() {
    let catalog = CourseCatalog::builtin();
    let course = catalog.lookup(1).unwrap();
    let view = build_rating_view(Some(1), &course.ratings, &RatingWeights::default());
    // 4.5*0.35 + 4*0.2 + 3*0.15 + 4.5*0.3 = 4.175
    assert_eq!(view.overall, 4.2);
    assert_eq!(view.metrics[3].key, "teacherStyle");
}

#[test]
fn test_grading_view_paths_and_total() {
    let items = vec![GradingItem::new("Project", 60.0), GradingItem::new("Final", 10.0)];
    let view = build_grading_view(&items);
    assert_eq!(view.total_percentage, 70.0);
    assert_eq!(view.arcs.len(), 2);
    assert_eq!(view.arcs[0].arc.start_angle, START_ANGLE_DEG);
    assert!(view.arcs.iter().all(|a| a.path.starts_with("M ")));
}

#[test]
fn test_grading_view_json_is_flat() {
    let view = build_grading_view(&[GradingItem::new("Final", 100.0)]);
    let json = serde_json::to_value(&view).unwrap();
    let arc = &json["arcs"][0];
    assert_eq!(arc["label"], "Final");
    assert_eq!(arc["start_angle"], -90.0);
    assert_eq!(arc["end_angle"], 270.0);
    assert!(arc["path"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_search_view_trims_query() {
    let catalog = CourseCatalog::builtin();
    let view = build_search_view(&catalog, "  networks ");
    assert_eq!(view.query, "networks");
    assert_eq!(view.results.len(), 1);
    assert_eq!(view.results[0].id, 7);
}

#[test]
fn test_comments_view_sorted() {
    let catalog = CourseCatalog::builtin();
    let course = catalog.lookup(1).unwrap();
    let by_date = build_comments_view(course, CommentSort::Date);
    assert_eq!(by_date.comments[0].date, "2024-01-20");
    let popular = build_comments_view(course, CommentSort::Popular);
    assert_eq!(popular.comments[0].likes, 10);
}

#[test]
fn test_cards_show_plain_average() {
    let catalog = CourseCatalog::builtin();
    let view = build_search_view(&catalog, "algorithms");
    assert_eq!(view.results.len(), 1);
    // (4.5 + 4 + 3 + 4.5) / 4; the weighted overall would be 4.2
    assert_eq!(view.results[0].average, 4.0);

    let saved = build_saved_view(&SavedCourseRegistry::with_ids([3]), &catalog);
    // (5 + 4 + 3 + 4.5) / 4 = 4.125
    assert_eq!(saved.courses[0].average, 4.1);
}

#[test]
fn test_summary_view_uses_summary_grading() {
    let catalog = CourseCatalog::builtin();
    let view = build_summary_view(catalog.lookup(5).unwrap());
    assert_eq!(view.summary.as_ref().unwrap().review_count, 9);
    assert_eq!(view.grading.arcs.len(), 1);
    assert_eq!(view.grading.total_percentage, 100.0);
}

#[test]
fn test_summary_view_without_reviews() {
    let catalog = CourseCatalog::builtin();
    let view = build_summary_view(catalog.lookup(9).unwrap());
    assert!(view.summary.is_none());
    assert!(view.grading.arcs.is_empty());
    let json = serde_json::to_value(&view).unwrap();
    assert!(json["summary"].is_null());
}

#[test]
fn test_basic_info_dash_for_missing_fields() {
    let course = Course::new(1, "Data Structures", "Wang", CourseRatings::default());
    let info = build_basic_info_view(&course);
    assert_eq!(info.school_dept, MISSING_FIELD);
    assert_eq!(info.code, MISSING_FIELD);
    assert_eq!(info.time, MISSING_FIELD);
    assert_eq!(info.credits, MISSING_FIELD);
    assert_eq!(info.course_type, MISSING_FIELD);
    assert_eq!(info.teacher, "Wang");

    let mut filled = course.clone();
    filled.code = Some("CS101".to_string());
    filled.credits = Some(3);
    filled.time = Some("  ".to_string());
    let info = build_basic_info_view(&filled);
    assert_eq!(info.code, "CS101");
    assert_eq!(info.credits, "3");
    assert_eq!(info.time, MISSING_FIELD);
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["type"], MISSING_FIELD);
}

#[test]
fn test_detail_view_caps_tags() {
    let mut course = Course::new(1, "Data Structures", "Wang", CourseRatings::default());
    course.tags = (1..=8).map(|i| format!("tag{i}")).collect();
    let view = build_detail_view(&course, &RatingWeights::default());
    assert_eq!(view.tags.len(), MAX_DETAIL_TAGS);
    assert_eq!(view.tags.last().unwrap(), "tag6");
    assert_eq!(view.comment_count, 0);
    assert_eq!(view.rating.course_id, Some(1));
}

#[test]
fn test_wish_list_view_keeps_order() {
    let view = build_wish_list_view(&crate::model::builtin_wish_list());
    assert_eq!(view.wishes.len(), 5);
    assert_eq!(view.wishes[0].id, 1);
}
