// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// A stable, non-negative integer identifier for a file record.
///
/// The on-wire record format (see `format::records`) uses `-1` as the
/// "no parent" sentinel; inside the model a missing parent is
/// `Option<FileId>::None`, so a `FileId` is always >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(i64);

impl FileId {
    pub fn new(value: i64) -> Result<Self, FileIdError> {
        if value < 0 {
            return Err(FileIdError::Negative { value });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileId {
    type Err = FileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| FileIdError::NotAnInteger { raw: s.to_owned() })?;
        Self::new(value)
    }
}

impl TryFrom<i64> for FileId {
    type Error = FileIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileIdError {
    Negative { value: i64 },
    NotAnInteger { raw: String },
}

impl fmt::Display for FileIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { value } => write!(f, "file id must not be negative (got {value})"),
            Self::NotAnInteger { raw } => write!(f, "file id must be an integer (got '{raw}')"),
        }
    }
}

impl std::error::Error for FileIdError {}
