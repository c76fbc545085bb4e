// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::model::{FileCatalog, FileRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSearchMode {
    Substring,
    Regex,
}

pub fn name_search<'a>(
    catalog: &'a FileCatalog,
    needle: &str,
    mode: NameSearchMode,
    case_insensitive: bool,
) -> Result<Vec<&'a FileRecord>, regex::Error> {
    match mode {
        NameSearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Ok(catalog
                    .iter()
                    .filter(|record| record.name().to_lowercase().contains(&needle_lower))
                    .collect())
            } else {
                Ok(catalog
                    .iter()
                    .filter(|record| record.name().contains(needle))
                    .collect())
            }
        }
        NameSearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok(catalog
                .iter()
                .filter(|record| regex.is_match(record.name()))
                .collect())
        }
    }
}

/// Records carrying the given category tag, in catalog order.
pub fn files_in_category<'a>(catalog: &'a FileCatalog, category: &str) -> Vec<&'a FileRecord> {
    catalog
        .iter()
        .filter(|record| record.categories().iter().any(|tag| tag == category))
        .collect()
}
