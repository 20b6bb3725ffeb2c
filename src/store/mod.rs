// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File-backed collaborators.
//!
//! `MetadataFile` reads country metadata (parameters map and parameter tree) from JSON;
//! `ReformFolder` reads and writes reform documents keyed by reform id.

mod error;
pub mod metadata_file;
pub mod reform_folder;

pub use error::StoreError;
pub use metadata_file::MetadataFile;
pub use reform_folder::ReformFolder;
