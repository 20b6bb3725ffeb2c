// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use tracing::debug;

use super::focus::walk_focus_path;
use super::outputs::{policy_output_children, POLICY_OUTPUT_LABEL, POLICY_OUTPUT_ROOT};
use crate::model::{Metadata, Policy, TreeNode};

const OUTPUT_DETAIL_MARKER: &str = "policyOutput.";

/// The main content region of the policy page. At most one is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "camelCase")]
pub enum Panel<'a> {
    Loading,
    ParameterEditor {
        parameter: &'a str,
    },
    FolderListing {
        label: &'a str,
        children: &'a [TreeNode],
    },
    OutputFolderListing {
        label: &'a str,
        children: &'a [TreeNode],
    },
    /// Sub-view choice is left to the output renderer.
    OutputDetail {
        output: &'a str,
    },
}

impl Panel<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::ParameterEditor { .. } => "parameterEditor",
            Self::FolderListing { .. } => "folderListing",
            Self::OutputFolderListing { .. } => "outputFolderListing",
            Self::OutputDetail { .. } => "outputDetail",
        }
    }
}

/// Selects the content panel for `focus`. Arms are in priority order; the first match wins.
///
/// Unknown or stale focus values select nothing.
pub fn select_panel<'a>(
    focus: &'a str,
    metadata: &'a Metadata,
    policy: &Policy,
) -> Option<Panel<'a>> {
    match (policy.is_loaded(), metadata.parameter(focus)) {
        (false, _) => Some(Panel::Loading),
        (true, Some(entry)) if entry.is_parameter() => {
            Some(Panel::ParameterEditor { parameter: focus })
        }
        (true, Some(_)) => match find_in_tree(metadata.parameter_roots(), focus) {
            Some(node) => Some(Panel::FolderListing {
                label: node.label(),
                children: node.children(),
            }),
            None => {
                debug!(focus, "metadata names a folder that is missing from the parameter tree");
                None
            }
        },
        (true, None) if focus == POLICY_OUTPUT_ROOT => Some(Panel::OutputFolderListing {
            label: POLICY_OUTPUT_LABEL,
            children: policy_output_children(),
        }),
        (true, None) if focus.contains(OUTPUT_DETAIL_MARKER) => {
            Some(Panel::OutputDetail { output: focus })
        }
        (true, None) => None,
    }
}

/// Finds the node named `name` beneath `roots` by walking its dotted prefixes.
pub fn find_in_tree<'a>(roots: &'a [TreeNode], name: &str) -> Option<&'a TreeNode> {
    walk_focus_path(name, roots).and_then(|path| path.last().copied())
}
