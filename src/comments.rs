use serde::Serialize;

use crate::model::CourseComment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    /// Newest first.
    #[default]
    Date,
    /// Most liked first.
    Popular,
}

impl CommentSort {
    pub fn toggle(self) -> Self {
        match self {
            CommentSort::Date => CommentSort::Popular,
            CommentSort::Popular => CommentSort::Date,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CommentSort::Date => "date",
            CommentSort::Popular => "popular",
        }
    }
}

/// Returns the comments in display order. Ties keep their input order.
pub fn sort_comments(comments: &[CourseComment], sort: CommentSort) -> Vec<&CourseComment> {
    let mut out: Vec<&CourseComment> = comments.iter().collect();
    match sort {
        CommentSort::Date => out.sort_by(|a, b| b.date.cmp(&a.date)),
        CommentSort::Popular => out.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/comments.rs"]
mod tests;
