use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::AppError;
use crate::model::course::{Course, CourseComment, CourseRatings, CourseSummary, GradingItem};

/// Read-only course records keyed by id.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: BTreeMap<u32, Course>,
}

impl CourseCatalog {
    pub fn from_courses(courses: Vec<Course>) -> Result<Self, AppError> {
        let mut map = BTreeMap::new();
        for course in courses {
            let id = course.id;
            if map.insert(id, course).is_some() {
                return Err(AppError::DuplicateCourse(id));
            }
        }
        Ok(Self { courses: map })
    }

    /// Reads a JSON array of courses.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let courses: Vec<Course> = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), courses = courses.len(), "catalog file parsed");
        Self::from_courses(courses)
    }

    pub fn builtin() -> Self {
        let courses = BUILTIN_COURSES
            .iter()
            .map(|def| {
                let mut course = Course::new(
                    def.id,
                    def.name,
                    def.teacher,
                    CourseRatings::new(
                        def.ratings[0],
                        def.ratings[1],
                        def.ratings[2],
                        def.ratings[3],
                    ),
                );
                course.tags = def.tags.iter().map(|t| t.to_string()).collect();
                if let Some(info) = &def.info {
                    course.school_dept = Some(info.dept.to_string());
                    course.code = Some(info.code.to_string());
                    course.time = info.time.map(str::to_string);
                    course.credits = Some(info.credits);
                    course.course_type = Some(info.kind.to_string());
                }
                course.summary = def.summary.as_ref().map(SummaryDef::to_summary);
                course.comments = def
                    .comments
                    .iter()
                    .map(|c| CourseComment {
                        id: c.id,
                        user: c.user.to_string(),
                        title: c.title.to_string(),
                        content: c.content.to_string(),
                        date: c.date.to_string(),
                        likes: c.likes,
                        dislikes: c.dislikes,
                    })
                    .collect();
                course
            })
            .map(|course| (course.id, course))
            .collect();
        Self { courses }
    }

    pub fn lookup(&self, id: u32) -> Option<&Course> {
        self.courses.get(&id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Case-insensitive substring match on name, teacher and tags.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.courses
            .values()
            .filter(|course| {
                course.name.to_lowercase().contains(&needle)
                    || course.teacher.to_lowercase().contains(&needle)
                    || course
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

struct CourseDef {
    id: u32,
    name: &'static str,
    teacher: &'static str,
    tags: &'static [&'static str],
    /// reward, score, easiness, teacher style
    ratings: [f64; 4],
    info: Option<InfoDef>,
    summary: Option<SummaryDef>,
    comments: &'static [CommentDef],
}

struct InfoDef {
    dept: &'static str,
    code: &'static str,
    time: Option<&'static str>,
    credits: u32,
    kind: &'static str,
}

struct SummaryDef {
    overview: &'static str,
    target_audience: &'static str,
    textbook: &'static str,
    prerequisites: &'static str,
    weekly_hours: &'static str,
    grading: &'static [(&'static str, f64)],
    notes: &'static str,
    review_count: u32,
}

impl SummaryDef {
    fn to_summary(&self) -> CourseSummary {
        CourseSummary {
            overview: self.overview.to_string(),
            target_audience: self.target_audience.to_string(),
            textbook: self.textbook.to_string(),
            prerequisites: self.prerequisites.to_string(),
            weekly_hours: self.weekly_hours.to_string(),
            grading_items: self
                .grading
                .iter()
                .map(|&(label, pct)| GradingItem::new(label, pct))
                .collect(),
            notes: self.notes.to_string(),
            review_count: self.review_count,
        }
    }
}

struct CommentDef {
    id: u32,
    user: &'static str,
    title: &'static str,
    content: &'static str,
    date: &'static str,
    likes: u32,
    dislikes: u32,
}

const EXAM_HEAVY: &[(&str, f64)] = &[("Homework", 30.0), ("Midterm", 30.0), ("Final", 40.0)];
const PROJECT_HEAVY: &[(&str, f64)] = &[
    ("Homework", 20.0),
    ("Project", 50.0),
    ("Participation", 10.0),
    ("Final", 20.0),
];
const FINAL_ONLY: &[(&str, f64)] = &[("Final", 100.0)];

const ALGORITHMS_COMMENTS: &[CommentDef] = &[
    CommentDef {
        id: 1,
        user: "Anonymous A",
        title: "Great course",
        content: "Clear lectures, learned a lot.",
        date: "2024-01-15",
        likes: 10,
        dislikes: 2,
    },
    CommentDef {
        id: 2,
        user: "Anonymous B",
        title: "Heavy homework",
        content: "Weekly problem sets take a lot of time.",
        date: "2024-01-20",
        likes: 5,
        dislikes: 1,
    },
];

const DATA_STRUCTURES_COMMENTS: &[CommentDef] = &[CommentDef {
    id: 1,
    user: "Anonymous C",
    title: "Practical",
    content: "Programming assignments are worth the effort.",
    date: "2024-02-03",
    likes: 7,
    dislikes: 0,
}];

const BUILTIN_COURSES: &[CourseDef] = &[
    CourseDef {
        id: 1,
        name: "Algorithms",
        teacher: "Wang Da-ming",
        tags: &["pick teammates carefully", "high grades", "lots of homework"],
        ratings: [4.5, 4.0, 3.0, 4.5],
        info: Some(InfoDef {
            dept: "Computer Science",
            code: "CS2031",
            time: Some("Mon 3-4"),
            credits: 3,
            kind: "Required",
        }),
        summary: Some(SummaryDef {
            overview: "Design and analysis of classic algorithms with weekly proofs.",
            target_audience: "Second-year CS students",
            textbook: "Introduction to Algorithms",
            prerequisites: "Data Structures, Discrete Math",
            weekly_hours: "6-9 hours",
            grading: EXAM_HEAVY,
            notes: "Problem sets are long; start early.",
            review_count: 42,
        }),
        comments: ALGORITHMS_COMMENTS,
    },
    CourseDef {
        id: 2,
        name: "Dynamics",
        teacher: "Liao Lao-da",
        tags: &["concepts matter", "hard final"],
        ratings: [4.0, 3.5, 2.5, 4.0],
        info: Some(InfoDef {
            dept: "Mechanical Engineering",
            code: "ME2002",
            time: Some("Tue 2-4"),
            credits: 3,
            kind: "Required",
        }),
        summary: Some(SummaryDef {
            overview: "Kinematics and kinetics of particles and rigid bodies.",
            target_audience: "Engineering sophomores",
            textbook: "Engineering Mechanics: Dynamics",
            prerequisites: "Statics, Calculus",
            weekly_hours: "5-8 hours",
            grading: EXAM_HEAVY,
            notes: "The final covers everything.",
            review_count: 18,
        }),
        comments: &[],
    },
    CourseDef {
        id: 3,
        name: "Data Structures",
        teacher: "Prof. Chen",
        tags: &["practical", "programming assignments"],
        ratings: [5.0, 4.0, 3.0, 4.5],
        info: Some(InfoDef {
            dept: "Computer Science",
            code: "CS1010",
            time: Some("Wed 6-8"),
            credits: 3,
            kind: "Required",
        }),
        summary: Some(SummaryDef {
            overview: "Lists, trees, heaps and graphs, implemented from scratch.",
            target_audience: "First-year CS students",
            textbook: "Data Structures and Algorithm Analysis",
            prerequisites: "Intro to Programming",
            weekly_hours: "5-8 hours",
            grading: PROJECT_HEAVY,
            notes: "Assignments are heavy but rewarding.",
            review_count: 35,
        }),
        comments: DATA_STRUCTURES_COMMENTS,
    },
    CourseDef {
        id: 4,
        name: "Linear Algebra",
        teacher: "Dr. Lin",
        tags: &["fundamentals", "many exams"],
        ratings: [4.0, 3.5, 2.0, 3.5],
        info: Some(InfoDef {
            dept: "Mathematics",
            code: "MA1003",
            time: None,
            credits: 3,
            kind: "Required",
        }),
        summary: None,
        comments: &[],
    },
    CourseDef {
        id: 5,
        name: "Probability and Statistics",
        teacher: "Teacher Wu",
        tags: &["math foundations", "widely applicable"],
        ratings: [4.5, 4.0, 3.5, 4.0],
        info: Some(InfoDef {
            dept: "Statistics",
            code: "ST2001",
            time: Some("Thu 3-4"),
            credits: 3,
            kind: "Elective",
        }),
        summary: Some(SummaryDef {
            overview: "Probability models and basic inference.",
            target_audience: "Students from any department",
            textbook: "A First Course in Probability",
            prerequisites: "Calculus",
            weekly_hours: "3-5 hours",
            grading: FINAL_ONLY,
            notes: "One exam decides the grade.",
            review_count: 9,
        }),
        comments: &[],
    },
    CourseDef {
        id: 6,
        name: "Operating Systems",
        teacher: "Prof. Cheng",
        tags: &["core requirement", "hands-on"],
        ratings: [5.0, 4.5, 2.5, 4.5],
        info: Some(InfoDef {
            dept: "Computer Science",
            code: "CS3100",
            time: Some("Fri 2-4"),
            credits: 3,
            kind: "Required",
        }),
        summary: Some(SummaryDef {
            overview: "Processes, memory and file systems through kernel labs.",
            target_audience: "Third-year CS students",
            textbook: "Operating System Concepts",
            prerequisites: "Computer Organization",
            weekly_hours: "8-12 hours",
            grading: PROJECT_HEAVY,
            notes: "Labs build on each other.",
            review_count: 27,
        }),
        comments: &[],
    },
    CourseDef {
        id: 7,
        name: "Computer Networks",
        teacher: "Dr. Huang",
        tags: &["practical", "concepts matter"],
        ratings: [4.0, 3.5, 3.0, 4.0],
        info: Some(InfoDef {
            dept: "Computer Science",
            code: "CS3200",
            time: Some("Mon 6-7"),
            credits: 3,
            kind: "Elective",
        }),
        summary: None,
        comments: &[],
    },
    CourseDef {
        id: 8,
        name: "Introduction to AI",
        teacher: "Prof. Li",
        tags: &["popular", "cutting edge"],
        ratings: [5.0, 4.5, 3.0, 5.0],
        info: Some(InfoDef {
            dept: "Computer Science",
            code: "CS4010",
            time: Some("Tue 7-9"),
            credits: 3,
            kind: "Elective",
        }),
        summary: Some(SummaryDef {
            overview: "Search, learning and reasoning with small projects.",
            target_audience: "Upper-level undergraduates",
            textbook: "Artificial Intelligence: A Modern Approach",
            prerequisites: "Probability and Statistics",
            weekly_hours: "5-8 hours",
            grading: PROJECT_HEAVY,
            notes: "Seats fill quickly.",
            review_count: 51,
        }),
        comments: &[],
    },
    CourseDef {
        id: 9,
        name: "Software Engineering",
        teacher: "Teacher Liu",
        tags: &["teamwork", "project based"],
        ratings: [4.5, 4.0, 3.5, 4.0],
        info: None,
        summary: None,
        comments: &[],
    },
];

#[cfg(test)]
#[path = "../../tests/src_inline/model/catalog.rs"]
mod tests;
