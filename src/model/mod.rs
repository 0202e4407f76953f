pub mod catalog;
pub mod course;
pub mod wish;

pub use catalog::CourseCatalog;
pub use course::{Course, CourseComment, CourseRatings, CourseSummary, GradingItem};
pub use wish::{WishCourse, builtin_wish_list};
