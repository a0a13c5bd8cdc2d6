// CourseLens - core/export.rs
//
// CSV and JSON export of the current (filtered, sorted) course view.
// Core layer: writes to any Write trait object.

use crate::core::model::Course;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export courses to CSV format.
///
/// Writes: id, title, department, level, credits, instructor, semester, skill, description.
/// Unset level/credits are written as "N/A"; an unassigned instructor as "TBA".
pub fn export_csv<W: Write>(
    courses: &[&Course],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "title",
            "department",
            "level",
            "credits",
            "instructor",
            "semester",
            "skill",
            "description",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for course in courses {
        let level = course.level.to_string();
        let credits = course.credits.to_string();
        csv_writer
            .write_record([
                course.id.as_str(),
                course.title.as_str(),
                course.department.as_str(),
                level.as_str(),
                credits.as_str(),
                course.display_instructor(),
                course.semester.as_str(),
                course.skill.as_str(),
                course.description.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export courses to JSON format (array of objects) that reloads unchanged.
pub fn export_json<W: Write>(
    courses: &[&Course],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, courses).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(courses.len())
}
