//! Session state for the interactive surface.

use crate::catalog::Catalog;
use crate::model::Course;
use crate::query::{self, CourseQuery, SearchOutcome, SortKey};

/// The only stateful piece of the system: the loaded catalog, the current
/// query inputs, and the outcome of the last recomputation. Every input
/// change funnels through [`SearchSession::refresh`].
pub struct SearchSession {
    catalog: Catalog,
    query: CourseQuery,
    outcome: SearchOutcome,
}

impl SearchSession {
    pub fn new(catalog: Catalog) -> Self {
        let query = CourseQuery::default();
        let outcome = query::search(&catalog, &query);
        Self {
            catalog,
            query,
            outcome,
        }
    }

    pub fn set_university(&mut self, value: &str) {
        self.query.university = value.to_string();
        self.refresh();
    }

    pub fn set_area(&mut self, value: &str) {
        self.query.area = value.to_string();
        self.refresh();
    }

    pub fn set_course_name(&mut self, value: &str) {
        self.query.course_name = value.to_string();
        self.refresh();
    }

    pub fn set_degree_type(&mut self, value: &str) {
        self.query.degree_type = value.to_string();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.query.sort = sort;
        self.refresh();
    }

    /// Clear every input and recompute, returning to the initial preview.
    pub fn reset(&mut self) {
        self.query = CourseQuery::default();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.outcome = query::search(&self.catalog, &self.query);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &CourseQuery {
        &self.query
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn visible_courses(&self) -> impl Iterator<Item = &Course> {
        self.outcome
            .visible
            .iter()
            .filter_map(|&index| self.catalog.get(index))
    }
}
