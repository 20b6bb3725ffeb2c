// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared UI state.
//!
//! Holds the current navigation state. Writers hand in a complete replacement value; readers use
//! the revision counter to notice changes.

use tracing::info;

use crate::model::{Metadata, Policy};
use crate::nav::{settle, NavState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    rev: u64,
    nav: NavState,
}

impl UiState {
    pub fn new(nav: NavState) -> Self {
        Self { rev: 0, nav }
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Replaces the navigation state. Returns whether anything changed.
    pub fn replace_nav(&mut self, nav: NavState) -> bool {
        if self.nav == nav {
            return false;
        }

        info!(from = %self.nav, to = %nav, "navigation");
        self.nav = nav;
        self.rev = self.rev.wrapping_add(1);
        true
    }

    /// Applies pending state corrections. Returns whether a write happened.
    pub fn settle(&mut self, policy: &Policy, metadata: &Metadata) -> bool {
        match settle(&self.nav, policy, metadata) {
            Some(next) => self.replace_nav(next),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiState;
    use crate::model::{demo_metadata, Policy};
    use crate::nav::NavState;

    #[test]
    fn replace_bumps_rev_only_on_change() {
        let mut state = UiState::new(NavState::new("/uk/policy"));
        assert!(!state.replace_nav(NavState::new("/uk/policy")));
        assert_eq!(state.rev(), 0);

        assert!(state.replace_nav(state.nav().with_focus("gov")));
        assert_eq!(state.rev(), 1);
        assert_eq!(state.nav().focus(), "gov");
    }

    #[test]
    fn settle_writes_once_then_stays_quiet() {
        let metadata = demo_metadata();
        let policy = Policy::default();
        let mut state = UiState::new(NavState::new("/uk/policy"));

        assert!(state.settle(&policy, &metadata));
        let rev = state.rev();
        assert!(!state.settle(&policy, &metadata));
        assert_eq!(state.rev(), rev);
        assert_eq!(state.nav().focus(), "gov");
        assert_eq!(state.nav().reform(), Some("1"));
    }
}
