// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{FileCatalog, FileId, FileRecord};

/// "No parent" sentinel in the flat record encoding.
const NO_PARENT: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RawFileRecord {
    id: i64,
    name: String,
    #[serde(default)]
    categories: Vec<String>,
    parent: i64,
    size: u64,
}

/// Parse a JSON array of flat file records into a catalog.
///
/// Structural validation stops at the record boundary: ids must be unique
/// and non-negative, `parent` must be a plausible id or the `-1` sentinel.
/// Whether every parent resolves (and whether the chains are acyclic) is a
/// forest property, checked by the query layer.
pub fn parse_file_records(input: &str) -> Result<FileCatalog, FileRecordsParseError> {
    let docs: Vec<RawFileRecord> =
        serde_json::from_str(input).map_err(|source| FileRecordsParseError::Json { source })?;

    let mut seen = BTreeSet::new();
    let mut catalog = FileCatalog::new();
    for (index, doc) in docs.into_iter().enumerate() {
        let file_id =
            FileId::new(doc.id).map_err(|_| FileRecordsParseError::NegativeId {
                index,
                id: doc.id,
            })?;
        if !seen.insert(file_id) {
            return Err(FileRecordsParseError::DuplicateId { file_id });
        }

        let parent = match doc.parent {
            NO_PARENT => None,
            value => Some(FileId::new(value).map_err(|_| {
                FileRecordsParseError::InvalidParent {
                    file_id,
                    parent: value,
                }
            })?),
        };

        catalog.push(FileRecord::new_with(
            file_id,
            doc.name,
            doc.categories,
            parent,
            doc.size,
        ));
    }

    Ok(catalog)
}

/// Export a catalog as pretty JSON, writing `-1` for missing parents.
pub fn export_file_records(catalog: &FileCatalog) -> Result<String, serde_json::Error> {
    let docs = catalog
        .iter()
        .map(|record| RawFileRecord {
            id: record.file_id().get(),
            name: record.name().to_owned(),
            categories: record.categories().to_vec(),
            parent: record.parent().map_or(NO_PARENT, FileId::get),
            size: record.size(),
        })
        .collect::<Vec<_>>();

    serde_json::to_string_pretty(&docs)
}

#[derive(Debug)]
pub enum FileRecordsParseError {
    Json { source: serde_json::Error },
    NegativeId { index: usize, id: i64 },
    DuplicateId { file_id: FileId },
    InvalidParent { file_id: FileId, parent: i64 },
}

impl fmt::Display for FileRecordsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "invalid record json: {source}"),
            Self::NegativeId { index, id } => {
                write!(f, "record {index} has a negative id ({id})")
            }
            Self::DuplicateId { file_id } => write!(f, "duplicate file id {file_id}"),
            Self::InvalidParent { file_id, parent } => {
                write!(
                    f,
                    "file {file_id} has an invalid parent {parent} (expected an id or -1)"
                )
            }
        }
    }
}

impl std::error::Error for FileRecordsParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::NegativeId { .. } => None,
            Self::DuplicateId { .. } => None,
            Self::InvalidParent { .. } => None,
        }
    }
}
