use serde::Serialize;

/// A single course row from the dataset.
///
/// All fields are plain text, owned, and immutable once parsed. Rows with
/// fewer columns than the header get empty strings for the missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub course_name: String,
    pub university_name: String,
    pub university_type: String, // e.g. "Public" / "Private"
    pub degree_type: String,     // e.g. "Bachelor", "Master"
    pub duration: String,        // display string, rendered as "<N> years"
    pub language: String,
    pub course_code: String,
    pub course_area: String,
    pub website: String,
}

#[cfg(test)]
impl Course {
    pub(crate) fn sample(course_name: &str, university_name: &str, degree_type: &str) -> Self {
        Self {
            course_name: course_name.to_string(),
            university_name: university_name.to_string(),
            university_type: "Public".to_string(),
            degree_type: degree_type.to_string(),
            duration: "3".to_string(),
            language: "English".to_string(),
            course_code: "C000".to_string(),
            course_area: "Science".to_string(),
            website: String::new(),
        }
    }
}
