//! Filter and sort composition over the catalog.
//!
//! A [`CourseQuery`] holds the current value of every query input; [`search`]
//! recomputes the full result set from scratch on every call, so there is no
//! incremental state to invalidate.

use crate::catalog::Catalog;
use crate::matcher;
use crate::model::Course;
use log::info;

/// Number of records shown before any filter or sort input has been set.
pub const INITIAL_PREVIEW_LIMIT: usize = 10;

/// Sort order for the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    University,
    DegreeType,
}

/// Current value of every query input. Empty text means the criterion is
/// unset and matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub university: String,
    pub area: String,
    pub course_name: String,
    pub degree_type: String,
    pub sort: Option<SortKey>,
}

impl CourseQuery {
    /// True when no filter or sort input has been set.
    pub fn is_initial(&self) -> bool {
        self.university.is_empty()
            && self.area.is_empty()
            && self.course_name.is_empty()
            && self.degree_type.is_empty()
            && self.sort.is_none()
    }

    /// All four field predicates must hold at once.
    pub fn matches(&self, course: &Course) -> bool {
        contains_ci(&course.university_name, &self.university)
            && contains_ci(&course.course_area, &self.area)
            && matcher::matches_with_tolerance(&self.course_name, &course.course_name)
            && (self.degree_type.is_empty() || course.degree_type == self.degree_type)
    }
}

/// Result of one recomputation. `visible` holds indices into the catalog;
/// `total` is the full filtered count, which in the initial state exceeds
/// the visible length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub visible: Vec<usize>,
    pub total: usize,
}

/// Filter, then sort, then cap.
///
/// The cap applies only in the initial state: the unfiltered preview shows
/// the first [`INITIAL_PREVIEW_LIMIT`] records while `total` still reports
/// the whole set.
pub fn search(catalog: &Catalog, query: &CourseQuery) -> SearchOutcome {
    let mut visible: Vec<usize> = catalog
        .courses()
        .iter()
        .enumerate()
        .filter(|(_, course)| query.matches(course))
        .map(|(index, _)| index)
        .collect();
    let total = visible.len();

    if let Some(key) = query.sort {
        // Vec::sort_by_key is stable, so equal keys keep insertion order.
        visible.sort_by_key(|&index| sort_field(catalog, key, index));
    }
    if query.is_initial() {
        visible.truncate(INITIAL_PREVIEW_LIMIT);
    }

    info!("search: {} of {} courses match", total, catalog.len());
    SearchOutcome { visible, total }
}

fn sort_field(catalog: &Catalog, key: SortKey, index: usize) -> &str {
    let Some(course) = catalog.get(index) else {
        return "";
    };
    match key {
        SortKey::University => &course.university_name,
        SortKey::DegreeType => &course.degree_type,
    }
}

/// Case-insensitive substring test; an empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
