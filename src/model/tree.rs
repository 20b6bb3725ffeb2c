// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// A labeled node of a navigation tree (parameter tree or output tree).
///
/// `name` is the full dotted path. A child's name is its parent's name plus `.` plus one local
/// segment; the tree is read-only input owned by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    name: String,
    label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds the direct child whose full name equals `name`.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        find_by_name(&self.children, name)
    }

    /// The last dotted segment of the name.
    pub fn local_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Whether this node lies on the path to `focus`: its name equals `focus` or is a whole-segment
    /// dotted prefix of it.
    pub fn is_on_path_to(&self, focus: &str) -> bool {
        match focus.strip_prefix(self.name.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

/// Finds the node named `name` within one level of siblings.
pub fn find_by_name<'a>(nodes: &'a [TreeNode], name: &str) -> Option<&'a TreeNode> {
    nodes.iter().find(|node| node.name == name)
}
