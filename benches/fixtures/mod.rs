// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sylva-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sylva and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use sylva::model::{FileCatalog, FileId, FileRecord};

const CATEGORY_POOL: [&str; 8] = [
    "Documents",
    "Media",
    "Photos",
    "Backup",
    "Excel",
    "Videos",
    "Audio",
    "Programming",
];

fn fid(value: i64) -> FileId {
    FileId::new(value).expect("valid file id")
}

pub fn checksum_catalog(catalog: &FileCatalog) -> u64 {
    let mut acc = 0u64;
    for record in catalog {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(record.file_id().get() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(record.name().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(record.categories().len() as u64);
        if let Some(parent) = record.parent() {
            acc = acc.wrapping_mul(131).wrapping_add(parent.get() as u64);
        }
        acc = acc.wrapping_mul(131).wrapping_add(record.size());
    }
    acc
}

pub fn checksum_names(names: &[String]) -> u64 {
    let mut acc = 0u64;
    for name in names {
        acc = acc.wrapping_mul(131).wrapping_add(name.len() as u64);
    }
    acc
}

pub mod forest {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub roots: usize,
        pub depth: usize,
        pub fanout: usize,
        pub categories_per_record: usize,
    }

    impl Params {
        pub const fn new(
            roots: usize,
            depth: usize,
            fanout: usize,
            categories_per_record: usize,
        ) -> Self {
            Self {
                roots,
                depth,
                fanout,
                categories_per_record,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumWide,
        DeepChains,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumWide => "medium_wide",
                Self::DeepChains => "deep_chains",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(3, 3, 3, 2),
                Self::MediumWide => Params::new(8, 4, 6, 3),
                Self::DeepChains => Params::new(4, 400, 1, 1),
            }
        }
    }

    fn record_name(id: i64) -> String {
        format!("file_{id:06}.dat")
    }

    fn record_categories(id: i64, count: usize) -> Vec<String> {
        (0..count)
            .map(|offset| {
                let pick = (id as usize).wrapping_add(offset) % CATEGORY_POOL.len();
                CATEGORY_POOL[pick].to_owned()
            })
            .collect()
    }

    fn record_size(id: i64) -> u64 {
        ((id as u64).wrapping_mul(37)) % 4096
    }

    /// Deterministic forest generator.
    ///
    /// Each root grows a complete `fanout`-ary tree of the given depth;
    /// `fanout = 1` produces long chains. Ids are sequential, so the
    /// catalog stays stable across runs.
    pub fn build(params: Params) -> FileCatalog {
        assert!(params.roots >= 1, "roots must be >= 1");
        assert!(params.depth >= 1, "depth must be >= 1");
        assert!(params.fanout >= 1, "fanout must be >= 1");

        let mut catalog = FileCatalog::new();
        let mut next_id: i64 = 0;

        for _ in 0..params.roots {
            let root_id = next_id;
            next_id += 1;
            catalog.push(FileRecord::new_with(
                fid(root_id),
                record_name(root_id),
                record_categories(root_id, params.categories_per_record),
                None,
                record_size(root_id),
            ));

            let mut level = vec![root_id];
            for _ in 1..params.depth {
                let mut next_level = Vec::with_capacity(level.len() * params.fanout);
                for parent_id in level {
                    for _ in 0..params.fanout {
                        let id = next_id;
                        next_id += 1;
                        catalog.push(FileRecord::new_with(
                            fid(id),
                            record_name(id),
                            record_categories(id, params.categories_per_record),
                            Some(fid(parent_id)),
                            record_size(id),
                        ));
                        next_level.push(id);
                    }
                }
                level = next_level;
            }
        }

        catalog
    }

    pub fn fixture(case: Case) -> FileCatalog {
        build(case.params())
    }
}
