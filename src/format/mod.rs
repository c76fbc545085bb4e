// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing and exporting of the flat file-record encoding.

pub mod records;

pub use records::{export_file_records, parse_file_records, FileRecordsParseError};
