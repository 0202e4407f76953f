use std::path::PathBuf;

use course_shelf::config::CatalogSource;

use super::*;

fn text_config() -> RunConfig {
    RunConfig {
        catalog: CatalogSource::Builtin,
        output: OutputFormat::Text,
    }
}

fn json_config() -> RunConfig {
    RunConfig {
        catalog: CatalogSource::Builtin,
        output: OutputFormat::Json,
    }
}

fn parse(args: &[&str]) -> Commands {
    let mut full = vec!["course-shelf"];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).unwrap().command
}

#[test]
fn test_saved_command_applies_ops_in_order() {
    let catalog = CourseCatalog::builtin();
    let cmd = parse(&["saved", "--op", "toggle:1", "--op", "toggle:8", "--op", "up:8"]);
    let out = execute(cmd, &catalog, &json_config()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["saved_ids"], serde_json::json!([3, 8, 5]));
    assert_eq!(json["unresolved"], 0);
}

#[test]
fn test_saved_command_empty_start() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["saved", "--empty"]), &catalog, &text_config()).unwrap();
    assert!(out.contains("(none)"));
}

#[test]
fn test_rating_command_from_flags() {
    let catalog = CourseCatalog::builtin();
    let cmd = parse(&[
        "rating",
        "--reward",
        "4.5",
        "--score",
        "4.0",
        "--easiness",
        "3.5",
        "--teacher-style",
        "4.2",
    ]);
    let out = execute(cmd, &catalog, &json_config()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["overall"], 4.2);
    assert!(json["course_id"].is_null());
}

#[test]
fn test_rating_command_unknown_course() {
    let catalog = CourseCatalog::builtin();
    let err = execute(parse(&["rating", "--course", "42"]), &catalog, &text_config()).unwrap_err();
    assert!(matches!(err, AppError::UnknownCourse(42)));
}

#[test]
fn test_grading_command_from_course() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["grading", "--course", "5"]), &catalog, &json_config()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["arcs"].as_array().unwrap().len(), 1);
    assert_eq!(json["arcs"][0]["end_angle"], 270.0);
}

#[test]
fn test_grading_command_from_items() {
    let catalog = CourseCatalog::builtin();
    let out = execute(
        parse(&["grading", "Homework=30", "Midterm=30", "Final=40"]),
        &catalog,
        &text_config(),
    )
    .unwrap();
    assert!(out.contains("Final"));
    assert!(!out.contains("not 100"));
}

#[test]
fn test_comments_command() {
    let catalog = CourseCatalog::builtin();
    let out = execute(
        parse(&["comments", "--course", "1", "--sort", "popular"]),
        &catalog,
        &json_config(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["sort"], "popular");
    assert_eq!(json["comments"][0]["likes"], 10);
}

#[test]
fn test_search_command() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["search", "algorithms"]), &catalog, &text_config()).unwrap();
    assert!(out.contains("[1] Algorithms"));
}

#[test]
fn test_run_with_missing_catalog_file() {
    let cli = Cli {
        catalog: Some(PathBuf::from("/nonexistent/course-shelf/catalog.json")),
        json: false,
        command: Commands::Search {
            query: "x".to_string(),
        },
    };
    assert!(matches!(run(cli), Err(AppError::Io { .. })));
}

#[test]
fn test_search_command_shows_average() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["search", "algorithms"]), &catalog, &json_config()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["results"][0]["average"], 4.0);
}

#[test]
fn test_grading_command_for_unreviewed_course() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["grading", "--course", "9"]), &catalog, &text_config()).unwrap();
    assert!(out.contains("(no grading items)"));
}

#[test]
fn test_summary_command() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["summary", "--course", "1"]), &catalog, &json_config()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["summary"]["reviewCount"], 42);
    assert_eq!(json["grading"]["arcs"].as_array().unwrap().len(), 3);

    let out = execute(parse(&["summary", "--course", "9"]), &catalog, &text_config()).unwrap();
    assert!(out.contains("No reviews yet"));
}

#[test]
fn test_show_command() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["show", "--course", "9"]), &catalog, &json_config()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["basic_info"]["code"], "-");
    assert_eq!(json["basic_info"]["teacher"], "Teacher Liu");
    assert!(json["summary"]["summary"].is_null());

    let err = execute(parse(&["show", "--course", "99"]), &catalog, &text_config()).unwrap_err();
    assert!(matches!(err, AppError::UnknownCourse(99)));
}

#[test]
fn test_wishes_command() {
    let catalog = CourseCatalog::builtin();
    let out = execute(parse(&["wishes"]), &catalog, &json_config()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["wishes"].as_array().unwrap().len(), 5);
    assert_eq!(json["wishes"][2]["id"], 3);
}
