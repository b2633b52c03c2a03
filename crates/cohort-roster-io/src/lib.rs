// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# cohort-roster-io

Read and write student rosters in CSV format.

The roster format is three comma-separated columns - `first name`,
`last name`, `ID` - with a header row. The header row is skipped on read
and written on write, so a written roster parses back to the same group.
Columns are positional; the header is documentation, not schema.
*/

use std::io;
use std::path::Path;

use cohort_structures::{Group, Student};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const FIRST_NAME: &str = "first name";
const LAST_NAME: &str = "last name";
const ID: &str = "ID";

/// Number of columns in a roster row
const ROSTER_COLUMNS: usize = 3;

/// Errors that can occur while reading or writing rosters
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Underlying file I/O failed
    #[error("failed to read or write roster: {0}")]
    Io(#[from] io::Error),

    /// The CSV layer rejected the data
    #[error("invalid roster data: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not have the three roster columns
    #[error("malformed roster row at line {line}: expected {ROSTER_COLUMNS} fields, got {fields}")]
    Malformed { line: u64, fields: usize },
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Read a group of students from a CSV roster file.
///
/// # Errors
///
/// Returns [`RosterError::Io`] when the file cannot be read, and the
/// errors of [`parse_roster`] for invalid content.
pub fn read_roster(path: &Path) -> RosterResult<Group<Student>> {
    parse_roster(&std::fs::read_to_string(path)?)
}

/// Parse a group of students from CSV roster data.
///
/// Empty input yields an empty group. The first row is always treated as
/// the header and skipped.
///
/// # Errors
///
/// Returns [`RosterError::Malformed`] for rows without exactly three
/// fields, [`RosterError::Csv`] for data the CSV layer cannot parse.
pub fn parse_roster(csv_text: &str) -> RosterResult<Group<Student>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut students = Group::new();

    for record in reader.records() {
        let record = record?;
        if record.len() != ROSTER_COLUMNS {
            return Err(RosterError::Malformed {
                line: record.position().map_or(0, |p| p.line()),
                fields: record.len(),
            });
        }
        students.add(Student::new(&record[0], &record[1], &record[2]));
    }

    Ok(students)
}

/// Serialize a group of students as a CSV roster string, header included.
///
/// Members are written in insertion order.
///
/// # Errors
///
/// Returns [`RosterError::Csv`] when serialization fails.
pub fn roster_to_string(students: &Group<Student>) -> RosterResult<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        write_records(&mut writer, students)?;
        writer.flush()?;
    }

    String::from_utf8(buffer)
        .map_err(|e| RosterError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write a group of students to a CSV roster file, header included.
///
/// # Errors
///
/// Returns [`RosterError::Csv`] or [`RosterError::Io`] when the file
/// cannot be written.
pub fn write_roster(path: &Path, students: &Group<Student>) -> RosterResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, students)?;
    writer.flush()?;
    Ok(())
}

fn write_records<W: io::Write>(
    writer: &mut csv::Writer<W>,
    students: &Group<Student>,
) -> RosterResult<()> {
    writer.write_record([FIRST_NAME, LAST_NAME, ID])?;
    for student in students.iter() {
        writer.write_record([&student.first_name, &student.last_name, &student.id])?;
    }
    Ok(())
}
