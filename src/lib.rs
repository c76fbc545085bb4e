// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sylva — forest queries over flat, parent-linked file catalogs.
//!
//! A `FileCatalog` is an ordered sequence of records whose parent links
//! encode a forest. The query layer answers structural questions about it
//! (leaves, category frequencies, per-root size totals) without ever
//! mutating the input; the format layer reads and writes the flat JSON
//! record encoding callers keep in config files.

pub mod format;
pub mod model;
pub mod query;
