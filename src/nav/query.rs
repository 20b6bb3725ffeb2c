// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::form_urlencoded;

pub const FOCUS_KEY: &str = "focus";
pub const REFORM_KEY: &str = "reform";

/// Navigation state: the current route plus its query parameters.
///
/// Values are never mutated in place. Every write produces a new `NavState` that the caller
/// hands back to the single writer (`UiState::replace_nav`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    path: String,
    params: BTreeMap<String, String>,
}

impl NavState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The focus path, or `""` when absent.
    pub fn focus(&self) -> &str {
        self.get(FOCUS_KEY).unwrap_or("")
    }

    /// The reform id parameter; an empty value counts as absent.
    pub fn reform(&self) -> Option<&str> {
        self.get(REFORM_KEY).filter(|value| !value.is_empty())
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Copy-then-set.
    #[must_use]
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.params.insert(key.to_owned(), value.into());
        next
    }

    #[must_use]
    pub fn with_focus(&self, focus: impl Into<String>) -> Self {
        self.with(FOCUS_KEY, focus)
    }

    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.params.remove(key);
        next
    }

    #[must_use]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.path = path.into();
        next
    }

    /// Parses `path?key=value&...`. Later duplicates win; a key without `=` maps to `""`.
    pub fn parse(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let params = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self {
            path: path.to_owned(),
            params,
        }
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.params)
                .finish();
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}
