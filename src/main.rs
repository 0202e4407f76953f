use clap::Parser;
use serde::Serialize;
use tracing::debug;

use course_shelf::cli::{CATALOG_ENV, Cli, Commands, RatingArgs};
use course_shelf::config::{OutputFormat, RunConfig};
use course_shelf::error::AppError;
use course_shelf::model::{CourseCatalog, CourseRatings, builtin_wish_list};
use course_shelf::rating::RatingWeights;
use course_shelf::report::json::render_json;
use course_shelf::report::text::{
    render_comments_text, render_detail_text, render_grading_text, render_rating_text,
    render_saved_text, render_search_text, render_summary_text, render_wishes_text,
};
use course_shelf::report::{
    build_comments_view, build_detail_view, build_grading_view, build_rating_view,
    build_saved_view, build_search_view, build_summary_view, build_wish_list_view,
};
use course_shelf::saved::SavedCourseRegistry;

fn main() {
    course_shelf::logging::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(out) => print!("{out}"),
        Err(err) => {
            debug!(error = ?err, "run failed");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, AppError> {
    let config =
        course_shelf::config::resolve(cli.catalog, std::env::var(CATALOG_ENV).ok(), cli.json);
    let catalog = config.load_catalog()?;
    debug!(courses = catalog.len(), "catalog ready");
    execute(cli.command, &catalog, &config)
}

fn execute(
    command: Commands,
    catalog: &CourseCatalog,
    config: &RunConfig,
) -> Result<String, AppError> {
    let weights = RatingWeights::default();
    match command {
        Commands::Saved { empty, ops } => {
            let mut registry = if empty {
                SavedCourseRegistry::new()
            } else {
                SavedCourseRegistry::default_seed()
            };
            for op in ops {
                registry.apply(op);
            }
            let view = build_saved_view(&registry, catalog);
            emit(config, &view, render_saved_text)
        }
        Commands::Rating(args) => {
            let (course_id, ratings) = rating_input(&args, catalog)?;
            let view = build_rating_view(course_id, &ratings, &weights);
            emit(config, &view, render_rating_text)
        }
        Commands::Grading { course, items } => {
            let items = match course {
                Some(id) => catalog
                    .lookup(id)
                    .ok_or(AppError::UnknownCourse(id))?
                    .grading_items()
                    .to_vec(),
                None => items,
            };
            let view = build_grading_view(&items);
            emit(config, &view, render_grading_text)
        }
        Commands::Search { query } => {
            let view = build_search_view(catalog, &query);
            emit(config, &view, render_search_text)
        }
        Commands::Comments { course, sort } => {
            let course = catalog
                .lookup(course)
                .ok_or(AppError::UnknownCourse(course))?;
            let view = build_comments_view(course, sort);
            emit(config, &view, render_comments_text)
        }
        Commands::Summary { course } => {
            let course = catalog
                .lookup(course)
                .ok_or(AppError::UnknownCourse(course))?;
            emit(config, &build_summary_view(course), render_summary_text)
        }
        Commands::Show { course } => {
            let course = catalog
                .lookup(course)
                .ok_or(AppError::UnknownCourse(course))?;
            emit(config, &build_detail_view(course, &weights), render_detail_text)
        }
        Commands::Wishes => {
            let view = build_wish_list_view(&builtin_wish_list());
            emit(config, &view, render_wishes_text)
        }
    }
}

fn emit<T: Serialize>(
    config: &RunConfig,
    view: &T,
    render_text: fn(&T) -> String,
) -> Result<String, AppError> {
    match config.output {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}

fn rating_input(
    args: &RatingArgs,
    catalog: &CourseCatalog,
) -> Result<(Option<u32>, CourseRatings), AppError> {
    if let Some(id) = args.course {
        let course = catalog.lookup(id).ok_or(AppError::UnknownCourse(id))?;
        return Ok((Some(id), course.ratings));
    }
    // clap enforces all four when --course is absent
    Ok((
        None,
        CourseRatings::new(
            args.reward.unwrap_or_default(),
            args.score.unwrap_or_default(),
            args.easiness.unwrap_or_default(),
            args.teacher_style.unwrap_or_default(),
        ),
    ))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
