use serde::{Deserialize, Serialize};

/// A course students have asked to be offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishCourse {
    pub id: u32,
    pub name: String,
    pub teacher: String,
}

const BUILTIN_WISHES: &[(u32, &str, &str)] = &[
    (1, "Algorithms", "Wang Da-ming"),
    (2, "Dynamics", "Liao Lao-da"),
    (3, "Contemporary Trends and Gender Studies", "Teacher Su"),
    (4, "Introduction to Eagle Training", "Yang Guo"),
    (5, "Introduction to Temple Culture", "Liu Mang"),
];

/// The wishing-well list shipped with the binary, in display order.
pub fn builtin_wish_list() -> Vec<WishCourse> {
    BUILTIN_WISHES
        .iter()
        .map(|&(id, name, teacher)| WishCourse {
            id,
            name: name.to_string(),
            teacher: teacher.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/wish.rs"]
mod tests;
