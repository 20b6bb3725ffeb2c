// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! State corrections run on every state check.
//!
//! Each returns the corrected navigation state only when a write is needed, so running them again
//! after the write is a no-op.

use tracing::info;

use super::query::{NavState, REFORM_KEY};
use crate::model::{CountryId, Metadata, Policy};

pub const DEFAULT_FOCUS: &str = "gov";

/// Sets focus to [`DEFAULT_FOCUS`] when it is absent or empty.
pub fn ensure_default_focus(nav: &NavState) -> Option<NavState> {
    if !nav.focus().is_empty() {
        return None;
    }
    info!(focus = DEFAULT_FOCUS, "initializing empty focus");
    Some(nav.with_focus(DEFAULT_FOCUS))
}

/// The reform a fresh visit starts from.
pub fn default_reform_id(country_id: &CountryId) -> &'static str {
    if country_id.as_str() == "us" {
        "2"
    } else {
        "1"
    }
}

/// Sets a default reform id when no reform is loaded and none is requested.
pub fn ensure_reform(nav: &NavState, policy: &Policy, metadata: &Metadata) -> Option<NavState> {
    if policy.is_loaded() || nav.reform().is_some() {
        return None;
    }
    let reform_id = default_reform_id(&metadata.country_id);
    info!(reform = reform_id, country = %metadata.country_id, "initializing missing reform");
    Some(nav.with(REFORM_KEY, reform_id))
}

/// Runs every correction in order. `None` means the state is already settled.
pub fn settle(nav: &NavState, policy: &Policy, metadata: &Metadata) -> Option<NavState> {
    let focused = ensure_default_focus(nav);
    let current = focused.as_ref().unwrap_or(nav);
    match ensure_reform(current, policy, metadata) {
        Some(next) => Some(next),
        None => focused,
    }
}

#[cfg(test)]
mod tests {
    use super::{default_reform_id, ensure_default_focus, ensure_reform, settle, DEFAULT_FOCUS};
    use crate::model::fixtures::demo_metadata_for;
    use crate::model::{demo_metadata, Policy, Reform, ReformData, ReformId};
    use crate::nav::query::{NavState, REFORM_KEY};

    #[test]
    fn empty_focus_is_corrected_once() {
        let nav = NavState::new("/uk/policy").with_focus("");
        let corrected = ensure_default_focus(&nav).expect("correction");
        assert_eq!(corrected.focus(), DEFAULT_FOCUS);
        assert_eq!(ensure_default_focus(&corrected), None);
    }

    #[test]
    fn existing_focus_is_left_alone() {
        let nav = NavState::new("/uk/policy").with_focus("policyOutput");
        assert_eq!(ensure_default_focus(&nav), None);
    }

    #[test]
    fn reform_default_depends_on_country() {
        assert_eq!(default_reform_id(&demo_metadata_for("us").country_id), "2");
        assert_eq!(default_reform_id(&demo_metadata_for("uk").country_id), "1");
        assert_eq!(default_reform_id(&demo_metadata_for("ca").country_id), "1");
    }

    #[test]
    fn missing_reform_is_initialized_when_not_loaded() {
        let metadata = demo_metadata_for("us");
        let nav = NavState::new("/us/policy").with_focus("gov");
        let next = ensure_reform(&nav, &Policy::default(), &metadata).expect("write");
        assert_eq!(next.get(REFORM_KEY), Some("2"));
        assert_eq!(ensure_reform(&next, &Policy::default(), &metadata), None);
    }

    #[test]
    fn loaded_reform_suppresses_initialization() {
        let metadata = demo_metadata();
        let mut policy = Policy::default();
        policy.set_reform(Reform::loaded(ReformId::new("9").unwrap(), ReformData::new()));
        let nav = NavState::new("/uk/policy");
        assert_eq!(ensure_reform(&nav, &policy, &metadata), None);
    }

    #[test]
    fn settle_applies_both_and_is_idempotent() {
        let metadata = demo_metadata();
        let policy = Policy::default();
        let nav = NavState::new("/uk/policy");

        let settled = settle(&nav, &policy, &metadata).expect("writes");
        assert_eq!(settled.focus(), "gov");
        assert_eq!(settled.reform(), Some("1"));
        assert_eq!(settle(&settled, &policy, &metadata), None);
    }
}
