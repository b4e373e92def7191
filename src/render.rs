//! Result rendering: plain-text cards and the JSON document.
//!
//! Both renderers take any [`io::Write`] sink so tests can assert on the
//! exact output without touching stdout.

use crate::catalog::Catalog;
use crate::model::Course;
use crate::query::SearchOutcome;
use serde_json::json;
use std::io;

/// Write the count line followed by one card per visible record.
pub fn render_text<W: io::Write>(
    out: &mut W,
    catalog: &Catalog,
    outcome: &SearchOutcome,
) -> io::Result<()> {
    writeln!(out, "Found {} course(s)", outcome.total)?;
    if outcome.total == 0 {
        writeln!(out)?;
        writeln!(out, "No courses match the current filters.")?;
        return Ok(());
    }
    for course in visible(catalog, outcome) {
        writeln!(out)?;
        write_card(out, course)?;
    }
    Ok(())
}

/// Write `{ "count": <total>, "courses": [...] }` over the visible set.
///
/// `count` reports the full filtered total, which in the initial-state
/// preview is larger than the number of courses emitted.
pub fn render_json<W: io::Write>(
    out: &mut W,
    catalog: &Catalog,
    outcome: &SearchOutcome,
) -> io::Result<()> {
    let courses: Vec<&Course> = visible(catalog, outcome).collect();
    let doc = json!({
        "count": outcome.total,
        "courses": courses,
    });
    let body = serde_json::to_string_pretty(&doc)?;
    writeln!(out, "{body}")
}

fn visible<'a>(
    catalog: &'a Catalog,
    outcome: &'a SearchOutcome,
) -> impl Iterator<Item = &'a Course> {
    outcome.visible.iter().filter_map(|&index| catalog.get(index))
}

fn write_card<W: io::Write>(out: &mut W, course: &Course) -> io::Result<()> {
    writeln!(out, "[{}] {}", course.degree_type, course.course_name)?;
    if course.university_type.is_empty() {
        writeln!(out, "  {}", course.university_name)?;
    } else {
        writeln!(out, "  {} ({})", course.university_name, course.university_type)?;
    }
    writeln!(
        out,
        "  Code: {} | Area: {} | Language: {} | Duration: {} years",
        course.course_code, course.course_area, course.language, course.duration
    )
}
