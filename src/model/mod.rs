// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Read-only inputs from the metadata collaborator (parameter tree and parameter map) plus the
//! policy collaborator's reform state.

pub(crate) mod fixtures;
pub mod ids;
pub mod metadata;
pub mod policy;
pub mod tree;

pub use fixtures::demo_metadata;
pub use ids::{CountryId, Id, IdError, ReformId};
pub use metadata::{Metadata, ParameterKind, ParameterMeta};
pub use policy::{parse_parameter_input, Policy, Reform, ReformData, ReformDocument};
pub use tree::{find_by_name, TreeNode};
