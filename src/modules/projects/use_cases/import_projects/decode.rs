// Decoding of an uploaded record collection.
//
// Responsibilities
// - Parse the upload in the requested format.
// - Run every row through the same ingestion rules as a single submission.
// - Report the first failure with a reason a person can act on. Produce nothing on failure.

use crate::modules::projects::adapters::codecs::{self, CodecError, FileFormat};
use crate::modules::projects::core::record::ProjectRecord;
use crate::modules::projects::use_cases::add_project::command::AddProject;
use crate::modules::projects::use_cases::add_project::decide::{DecideError, decide_add};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Malformed(#[from] CodecError),

    #[error("row {row}: {reason}")]
    InvalidRow { row: usize, reason: DecideError },
}

pub fn decode_import(
    format: FileFormat,
    content: &str,
    today: NaiveDate,
) -> Result<Vec<ProjectRecord>, ImportError> {
    let rows = codecs::decode(format, content)?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            decide_add(AddProject::from(row), today).map_err(|reason| ImportError::InvalidRow {
                row: index + 1,
                reason,
            })
        })
        .collect()
}
