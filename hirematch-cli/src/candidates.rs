//! Candidate CSV loading.
//!
//! Uploads use the column headings of the recruiter spreadsheet template:
//! `Candidate Full Name`, `Required Skills` (comma separated), `CGPA` and
//! `Experience(In Months)`. Values that cannot be parsed are left empty so
//! the scorer reports them per candidate instead of rejecting the file.

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use hirematch_core::{CandidateRecord, Cgpa};
use log::debug;
use serde::{Deserialize, Deserializer};

use crate::CliError;

#[derive(Debug, Deserialize)]
struct CandidateRow {
    #[serde(rename = "Candidate Full Name", default)]
    name: String,
    #[serde(rename = "Required Skills", default)]
    skills: String,
    #[serde(rename = "CGPA", default, deserialize_with = "empty_string_as_none")]
    cgpa: Option<String>,
    #[serde(
        rename = "Experience(In Months)",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    experience: Option<String>,
}

impl CandidateRow {
    fn into_record(self) -> CandidateRecord {
        let cgpa = self.cgpa.and_then(|raw| {
            raw.parse::<Cgpa>()
                .inspect_err(|err| debug!("candidate `{}`: ignoring CGPA: {err}", self.name))
                .ok()
        });
        let experience = self.experience.and_then(|raw| {
            let months = parse_experience(&raw);
            if months.is_none() {
                debug!("candidate `{}`: ignoring experience '{raw}'", self.name);
            }
            months
        });
        CandidateRecord::new(self.name, self.skills.split(','), cgpa, experience)
    }
}

/// Read an experience cell as a month count.
///
/// Accepts whole numbers (`12`, `12.0`) and short durations such as
/// `one year` or `6 months`, case-insensitively.
fn parse_experience(raw: &str) -> Option<u32> {
    let text = raw.trim().to_lowercase();
    if let Some(months) = parse_whole(&text) {
        return Some(months);
    }
    let mut words = text.split_whitespace();
    let (Some(quantity), Some(unit), None) = (words.next(), words.next(), words.next()) else {
        return None;
    };
    let count = match quantity {
        "a" | "an" | "one" => 1,
        other => parse_whole(other)?,
    };
    match unit {
        "month" | "months" => Some(count),
        "year" | "years" => count.checked_mul(12),
        _ => None,
    }
}

/// Parse a non-negative integer, tolerating a zero fractional part.
fn parse_whole(text: &str) -> Option<u32> {
    let whole = match text.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|digit| digit == '0') => whole,
        Some(_) => return None,
        None => text,
    };
    whole.parse().ok()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> std::io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Parse candidate rows from any CSV source.
pub(crate) fn read_candidates<R: Read>(reader: R) -> Result<Vec<CandidateRecord>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<CandidateRow>()
        .map(|row| row.map(CandidateRow::into_record))
        .collect()
}

/// Load candidate records from the CSV file at `path`.
pub(crate) fn load_candidates(
    path: &Utf8Path,
    field: &'static str,
) -> Result<Vec<CandidateRecord>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_candidates(BufReader::new(file)).map_err(|source| {
        CliError::ReadCandidates {
            path: Utf8PathBuf::from(path),
            source,
        }
    })?;
    debug!("loaded {} candidates from {path}", records.len());
    Ok(records)
}
