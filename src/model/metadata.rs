// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ids::CountryId;
use super::tree::TreeNode;

const PARAMETER_KIND: &str = "parameter";

/// Declared kind of a metadata entry. Only `"parameter"` entries are editable; anything else is a
/// grouping node and is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    Parameter,
    Node(String),
}

impl ParameterKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Parameter => PARAMETER_KIND,
            Self::Node(kind) => kind,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ParameterKind {
    fn from(value: String) -> Self {
        if value == PARAMETER_KIND {
            Self::Parameter
        } else {
            Self::Node(value)
        }
    }
}

impl Serialize for ParameterKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParameterKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// One entry of the metadata `parameters` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMeta {
    #[serde(default)]
    pub parameter: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Baseline values keyed by effective date.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl ParameterMeta {
    pub fn parameter(parameter: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            label: label.into(),
            kind: ParameterKind::Parameter,
            description: None,
            unit: None,
            values: BTreeMap::new(),
        }
    }

    pub fn node(parameter: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            label: label.into(),
            kind: ParameterKind::Node("parameterNode".to_owned()),
            description: None,
            unit: None,
            values: BTreeMap::new(),
        }
    }

    pub fn is_parameter(&self) -> bool {
        self.kind == ParameterKind::Parameter
    }

    /// The most recent baseline value, by date key order.
    pub fn latest_value(&self) -> Option<(&str, &serde_json::Value)> {
        self.values.iter().next_back().map(|(date, value)| (date.as_str(), value))
    }
}

/// Country metadata supplied by the metadata collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub country_id: CountryId,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterMeta>,
    pub parameter_tree: TreeNode,
}

impl Metadata {
    pub fn parameter(&self, name: &str) -> Option<&ParameterMeta> {
        self.parameters.get(name)
    }

    /// The container whose children are the top-level parameter trees.
    pub fn parameter_roots(&self) -> &[TreeNode] {
        std::slice::from_ref(&self.parameter_tree)
    }
}
