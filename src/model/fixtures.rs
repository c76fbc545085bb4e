// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalog::FileCatalog;
use super::file::FileRecord;
use super::ids::FileId;

fn fid(value: i64) -> FileId {
    FileId::new(value).expect("file id")
}

fn record(
    id: i64,
    name: &str,
    categories: &[&str],
    parent: Option<i64>,
    size: u64,
) -> FileRecord {
    FileRecord::new_with(
        fid(id),
        name,
        categories.iter().map(|c| (*c).to_owned()).collect(),
        parent.map(fid),
        size,
    )
}

/// The reference forest: two multi-level trees rooted at 3 and 233 plus a
/// standalone root 55, with folder records of size 0 and leaf files spread
/// over three levels.
pub(crate) fn reference_forest() -> FileCatalog {
    FileCatalog::from(vec![
        record(1, "Document.txt", &["Documents"], Some(3), 1024),
        record(2, "Image.jpg", &["Media", "Photos"], Some(34), 2048),
        record(3, "Folder", &["Folder"], None, 0),
        record(5, "Spreadsheet.xlsx", &["Documents", "Excel"], Some(3), 4096),
        record(8, "Backup.zip", &["Backup"], Some(233), 8192),
        record(
            13,
            "Presentation.pptx",
            &["Documents", "Presentation"],
            Some(3),
            3072,
        ),
        record(21, "Video.mp4", &["Media", "Videos"], Some(34), 6144),
        record(34, "Folder2", &["Folder"], Some(3), 0),
        record(55, "Code.py", &["Programming"], None, 1536),
        record(89, "Audio.mp3", &["Media", "Audio"], Some(34), 2560),
        record(144, "Spreadsheet2.xlsx", &["Documents", "Excel"], Some(3), 2048),
        record(233, "Folder3", &["Folder"], None, 4096),
    ])
}
