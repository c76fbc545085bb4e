// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub mod forest;
pub mod search;

pub use forest::{
    category_counts, k_largest_categories, largest_file_size, leaf_files, parent_reference_counts,
    resolve_root, root_sizes, MalformedForestError,
};
pub use search::{files_in_category, name_search, NameSearchMode};
