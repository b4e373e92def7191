//! Dataset loading and the owned in-memory course store.
//!
//! The catalog is loaded once at startup and read-only afterwards; filter
//! and search functions borrow it, they never own or mutate it.

use crate::model::Course;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The one failure mode of this system: the dataset could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed dataset: {0}")]
    Malformed(#[from] csv::Error),
}

/// Owned collection of course records for the session lifetime.
#[derive(Debug, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Load the dataset file at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        info!(
            "catalog: loaded {} courses from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse comma-separated course data with a header row.
    ///
    /// Quoted fields may contain commas and doubled-quote escapes, fields
    /// are whitespace-trimmed, and rows shorter than the header are padded
    /// with empty text. Lines with no content at all are skipped.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?;
        debug!("dataset columns: {:?}", headers);

        let mut courses = Vec::new();
        for record in rdr.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            courses.push(course_from_record(&record));
        }
        Ok(Self { courses })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Distinct degree types present in the dataset, sorted, for selection
    /// surfaces. Empty values are omitted.
    pub fn degree_types(&self) -> Vec<&str> {
        self.distinct(|c| &c.degree_type)
    }

    /// Distinct university names present in the dataset, sorted.
    pub fn university_names(&self) -> Vec<&str> {
        self.distinct(|c| &c.university_name)
    }

    fn distinct<F>(&self, field: F) -> Vec<&str>
    where
        F: Fn(&Course) -> &String,
    {
        self.courses
            .iter()
            .map(|c| field(c).as_str())
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Column order follows the dataset header contract:
/// Course Name, University, University Type, Degree Type, Duration,
/// Language, Course Code, Course Area, Website.
fn course_from_record(record: &StringRecord) -> Course {
    let field = |i: usize| record.get(i).unwrap_or("").to_string();
    Course {
        course_name: field(0),
        university_name: field(1),
        university_type: field(2),
        degree_type: field(3),
        duration: field(4),
        language: field(5),
        course_code: field(6),
        course_area: field(7),
        website: field(8),
    }
}
