// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::FileId;

/// A single file record in a flat, parent-linked catalog.
///
/// `parent` points at another record's id; `None` marks a root. The record
/// itself carries no tree structure — the forest exists only through the
/// parent links, and the query layer derives everything else from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    file_id: FileId,
    name: String,
    categories: Vec<String>,
    parent: Option<FileId>,
    size: u64,
}

impl FileRecord {
    /// A root record with no categories.
    pub fn new(file_id: FileId, name: impl Into<String>, size: u64) -> Self {
        Self {
            file_id,
            name: name.into(),
            categories: Vec::new(),
            parent: None,
            size,
        }
    }

    pub fn new_with(
        file_id: FileId,
        name: impl Into<String>,
        categories: Vec<String>,
        parent: Option<FileId>,
        size: u64,
    ) -> Self {
        Self {
            file_id,
            name: name.into(),
            categories,
            parent,
            size,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    pub fn push_category(&mut self, category: impl Into<String>) {
        self.categories.push(category.into());
    }

    pub fn set_parent(&mut self, parent: Option<FileId>) {
        self.parent = parent;
    }

    pub fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn parent(&self) -> Option<FileId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}
