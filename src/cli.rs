use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::comments::CommentSort;
use crate::model::GradingItem;
use crate::saved::SavedOp;

pub const CATALOG_ENV: &str = "COURSE_SHELF_CATALOG";

#[derive(Parser, Debug)]
#[command(
    name = "course-shelf",
    version,
    about = "Browse course ratings, grading breakdowns, reviews and a saved-course list"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Course catalog JSON file (defaults to $COURSE_SHELF_CATALOG, then the built-in catalog)"
    )]
    pub catalog: Option<PathBuf>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply saved-list operations and print the ordered list.
    Saved {
        #[arg(long, help = "Start from an empty list instead of the default seed")]
        empty: bool,
        #[arg(long = "op", value_name = "OP", help = "toggle:ID, up:ID or down:ID; repeatable, applied in order")]
        ops: Vec<SavedOp>,
    },
    /// Weighted overall rating with per-metric star fills.
    Rating(RatingArgs),
    /// Pie-chart arcs for a grading breakdown.
    Grading {
        #[arg(long, conflicts_with = "items")]
        course: Option<u32>,
        #[arg(value_name = "LABEL=PERCENT")]
        items: Vec<GradingItem>,
    },
    /// Find courses by name, teacher or tag.
    Search { query: String },
    /// Print a course's comment thread.
    Comments {
        #[arg(long)]
        course: u32,
        #[arg(long, value_enum, default_value_t = CommentSort::Date)]
        sort: CommentSort,
    },
    /// Review summary of a course, with its grading chart.
    Summary {
        #[arg(long)]
        course: u32,
    },
    /// Course detail page: basic info, ratings, summary.
    Show {
        #[arg(long)]
        course: u32,
    },
    /// List the wishing-well courses.
    Wishes,
}

#[derive(Args, Debug)]
pub struct RatingArgs {
    #[arg(long, conflicts_with_all = ["reward", "score", "easiness", "teacher_style"])]
    pub course: Option<u32>,
    #[arg(long, allow_hyphen_values = true, required_unless_present = "course")]
    pub reward: Option<f64>,
    #[arg(long, allow_hyphen_values = true, required_unless_present = "course")]
    pub score: Option<f64>,
    #[arg(long, allow_hyphen_values = true, required_unless_present = "course")]
    pub easiness: Option<f64>,
    #[arg(long, allow_hyphen_values = true, required_unless_present = "course")]
    pub teacher_style: Option<f64>,
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
