// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Policy collaborator state: the user's in-progress reform.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::ReformId;

/// Parameter overrides of a reform, keyed by parameter name.
pub type ReformData = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reform {
    id: Option<ReformId>,
    data: Option<ReformData>,
}

impl Reform {
    pub fn loaded(id: ReformId, data: ReformData) -> Self {
        Self {
            id: Some(id),
            data: Some(data),
        }
    }

    pub fn id(&self) -> Option<&ReformId> {
        self.id.as_ref()
    }

    /// `None` until the reform has been loaded.
    pub fn data(&self) -> Option<&ReformData> {
        self.data.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    pub reform: Reform,
}

impl Policy {
    pub fn is_loaded(&self) -> bool {
        self.reform.is_loaded()
    }

    /// Whether `reform_id` is the reform currently held (loaded or not).
    pub fn holds_reform(&self, reform_id: &ReformId) -> bool {
        self.reform.id.as_ref() == Some(reform_id)
    }

    pub fn set_reform(&mut self, reform: Reform) {
        self.reform = reform;
    }

    /// Writes an override into the loaded reform. Returns `false` when no reform is loaded yet.
    pub fn set_parameter(&mut self, parameter: &str, value: serde_json::Value) -> bool {
        let Some(data) = self.reform.data.as_mut() else {
            return false;
        };
        data.insert(parameter.to_owned(), value);
        true
    }

    /// Removes an override. Returns whether one was present.
    pub fn clear_parameter(&mut self, parameter: &str) -> bool {
        self.reform
            .data
            .as_mut()
            .is_some_and(|data| data.remove(parameter).is_some())
    }

    pub fn parameter_value(&self, parameter: &str) -> Option<&serde_json::Value> {
        self.reform.data.as_ref().and_then(|data| data.get(parameter))
    }
}

/// On-disk representation of a reform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReformDocument {
    pub id: ReformId,
    #[serde(default)]
    pub data: ReformData,
}

impl From<ReformDocument> for Reform {
    fn from(document: ReformDocument) -> Self {
        Self::loaded(document.id, document.data)
    }
}

/// Parses user input for a parameter value: JSON when it parses, a plain string otherwise.
pub fn parse_parameter_input(input: &str) -> serde_json::Value {
    let trimmed = input.trim();
    serde_json::from_str(trimmed).unwrap_or_else(|_| serde_json::Value::String(trimmed.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::{parse_parameter_input, Policy, Reform, ReformData};
    use crate::model::ReformId;
    use serde_json::json;

    #[test]
    fn setter_requires_loaded_reform() {
        let mut policy = Policy::default();
        assert!(!policy.set_parameter("gov.rate", json!(0.3)));

        policy.set_reform(Reform::loaded(ReformId::new("1").unwrap(), ReformData::new()));
        assert!(policy.set_parameter("gov.rate", json!(0.3)));
        assert_eq!(policy.parameter_value("gov.rate"), Some(&json!(0.3)));
        assert!(policy.clear_parameter("gov.rate"));
        assert!(!policy.clear_parameter("gov.rate"));
    }

    #[test]
    fn parses_numbers_bools_and_fallback_strings() {
        assert_eq!(parse_parameter_input(" 0.25 "), json!(0.25));
        assert_eq!(parse_parameter_input("true"), json!(true));
        assert_eq!(parse_parameter_input("flat rate"), json!("flat rate"));
    }
}
