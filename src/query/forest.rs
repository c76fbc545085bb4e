// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::model::{FileCatalog, FileId, FileRecord};

/// How often each id occurs as some record's parent.
///
/// Every record's own id is present (with 0 if nothing points at it).
/// Referenced ids without a record of their own keep their entries; callers
/// that need real records filter through `FileCatalog::by_id`.
pub fn parent_reference_counts(catalog: &FileCatalog) -> BTreeMap<FileId, u64> {
    let mut counts: BTreeMap<FileId, u64> = BTreeMap::new();

    for record in catalog {
        counts.entry(record.file_id()).or_default();
        if let Some(parent_id) = record.parent() {
            let count = counts.entry(parent_id).or_default();
            *count = count.saturating_add(1);
        }
    }

    counts
}

/// Names of all records never referenced as a parent, sorted ascending.
///
/// A childless root counts as a leaf. Tally entries whose id has no record
/// in the catalog are skipped rather than resolved to a missing name.
pub fn leaf_files(catalog: &FileCatalog) -> Vec<String> {
    let by_id = catalog.by_id();

    let mut names = parent_reference_counts(catalog)
        .into_iter()
        .filter(|(_, count)| *count == 0)
        .filter_map(|(file_id, _)| by_id.get(&file_id).map(|record| record.name().to_owned()))
        .collect::<Vec<_>>();

    names.sort();
    names
}

/// Occurrences of each category tag across all records.
///
/// A record carrying the same tag twice counts each occurrence.
pub fn category_counts(catalog: &FileCatalog) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();

    for record in catalog {
        for category in record.categories() {
            let count = counts.entry(category.clone()).or_default();
            *count = count.saturating_add(1);
        }
    }

    counts
}

/// The `k` most frequent categories, returned sorted ascending.
///
/// Ranking is count descending with category name ascending as the
/// secondary key, so equal counts at the cut resolve deterministically.
/// Fewer than `k` distinct categories returns all of them.
pub fn k_largest_categories(catalog: &FileCatalog, k: usize) -> Vec<String> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranking = category_counts(catalog).into_iter().collect::<Vec<_>>();
    ranking.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });
    ranking.truncate(k);

    let mut selected = ranking
        .into_iter()
        .map(|(name, _)| name)
        .collect::<Vec<_>>();
    selected.sort();
    selected
}

/// Resolve the ultimate root ancestor of `record`.
///
/// Walks parent links iteratively; a record with no parent is its own root.
pub fn resolve_root(
    catalog: &FileCatalog,
    record: &FileRecord,
) -> Result<FileId, MalformedForestError> {
    let by_id = catalog.by_id();
    let mut resolved = BTreeMap::new();
    resolve_root_cached(&by_id, record, &mut resolved)
}

/// Cumulative record size per root id.
///
/// Every record contributes its size to its root's group; roots contribute
/// to their own. Resolved roots are memoized across the pass, so shared
/// parent chains are walked once.
pub fn root_sizes(catalog: &FileCatalog) -> Result<BTreeMap<FileId, u64>, MalformedForestError> {
    let by_id = catalog.by_id();
    let mut resolved: BTreeMap<FileId, FileId> = BTreeMap::new();
    let mut sizes: BTreeMap<FileId, u64> = BTreeMap::new();

    for record in catalog {
        let root_id = resolve_root_cached(&by_id, record, &mut resolved)?;
        let total = sizes.entry(root_id).or_default();
        *total = total.saturating_add(record.size());
    }

    Ok(sizes)
}

/// The largest cumulative size of any root group; 0 for an empty catalog.
pub fn largest_file_size(catalog: &FileCatalog) -> Result<u64, MalformedForestError> {
    let sizes = root_sizes(catalog)?;
    Ok(sizes.into_values().max().unwrap_or(0))
}

fn resolve_root_cached(
    by_id: &BTreeMap<FileId, &FileRecord>,
    record: &FileRecord,
    resolved: &mut BTreeMap<FileId, FileId>,
) -> Result<FileId, MalformedForestError> {
    let mut chain = Vec::new();
    let mut visited = BTreeSet::new();
    let mut current = record;

    let root_id = loop {
        if let Some(root_id) = resolved.get(&current.file_id()) {
            break *root_id;
        }
        if !visited.insert(current.file_id()) {
            return Err(MalformedForestError::ParentCycle {
                file_id: record.file_id(),
            });
        }
        chain.push(current.file_id());

        let Some(parent_id) = current.parent() else {
            break current.file_id();
        };
        match by_id.get(&parent_id) {
            Some(parent) => current = parent,
            None => {
                return Err(MalformedForestError::DanglingParent {
                    file_id: current.file_id(),
                    parent_id,
                })
            }
        }
    };

    for file_id in chain {
        resolved.insert(file_id, root_id);
    }

    Ok(root_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedForestError {
    DanglingParent { file_id: FileId, parent_id: FileId },
    ParentCycle { file_id: FileId },
}

impl fmt::Display for MalformedForestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingParent { file_id, parent_id } => {
                write!(
                    f,
                    "parent {parent_id} of file {file_id} is not in the catalog"
                )
            }
            Self::ParentCycle { file_id } => {
                write!(f, "parent chain of file {file_id} contains a cycle")
            }
        }
    }
}

impl std::error::Error for MalformedForestError {}
