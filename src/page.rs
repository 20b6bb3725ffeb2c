// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The policy page: metadata, policy state and navigation state wired together.
//!
//! Front ends (the TUI, `--print`) drive a `PolicyPage` through the same cycle: settle the
//! navigation state, load the requested reform, then read breadcrumbs and the selected panel.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::model::{
    parse_parameter_input, IdError, Metadata, Policy, Reform, ReformData, ReformId,
};
use crate::nav::{page_breadcrumbs, policy_route, select_panel, Breadcrumb, NavState, Panel};
use crate::store::{ReformFolder, StoreError};
use crate::ui::UiState;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid reform id {raw:?}: {source}")]
    InvalidReformId {
        raw: String,
        #[source]
        source: IdError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no reform is loaded yet")]
    ReformNotLoaded,
    #[error("{0} is not an editable parameter")]
    NotAParameter(String),
}

/// A serializable view of the page for non-interactive output.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot<'a> {
    pub location: String,
    pub focus: &'a str,
    pub reform: Option<&'a str>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub panel: Option<Panel<'a>>,
}

#[derive(Debug, Clone)]
pub struct PolicyPage {
    metadata: Metadata,
    policy: Policy,
    ui: UiState,
    reforms: Option<ReformFolder>,
}

impl PolicyPage {
    /// Opens the page at its own route with no query parameters.
    pub fn new(metadata: Metadata, reforms: Option<ReformFolder>) -> Self {
        let nav = NavState::new(policy_route(&metadata));
        Self::with_nav(metadata, reforms, nav)
    }

    pub fn with_nav(metadata: Metadata, reforms: Option<ReformFolder>, nav: NavState) -> Self {
        Self {
            metadata,
            policy: Policy::default(),
            ui: UiState::new(nav),
            reforms,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn nav(&self) -> &NavState {
        self.ui.nav()
    }

    pub fn rev(&self) -> u64 {
        self.ui.rev()
    }

    pub fn focus(&self) -> &str {
        self.ui.nav().focus()
    }

    pub fn is_on_policy_route(&self) -> bool {
        self.ui.nav().path() == policy_route(&self.metadata)
    }

    pub fn navigate(&mut self, nav: NavState) -> bool {
        self.ui.replace_nav(nav)
    }

    pub fn set_focus(&mut self, focus: &str) -> bool {
        let next = self.ui.nav().with_focus(focus);
        self.ui.replace_nav(next)
    }

    /// Applies pending navigation corrections.
    pub fn settle(&mut self) -> bool {
        self.ui.settle(&self.policy, &self.metadata)
    }

    /// Loads the reform named by the `reform` parameter when it is not the one held.
    /// Returns whether a load happened.
    pub fn load_pending_reform(&mut self) -> Result<bool, PageError> {
        let Some(raw) = self.ui.nav().reform() else {
            return Ok(false);
        };
        let reform_id = ReformId::new(raw).map_err(|source| PageError::InvalidReformId {
            raw: raw.to_owned(),
            source,
        })?;
        if self.policy.holds_reform(&reform_id) && self.policy.is_loaded() {
            return Ok(false);
        }

        let reform = match &self.reforms {
            Some(folder) => folder.load(&reform_id)?,
            None => Reform::loaded(reform_id, ReformData::new()),
        };
        self.policy.set_reform(reform);
        Ok(true)
    }

    /// Settles and loads until nothing changes. Used by non-interactive front ends.
    pub fn settle_and_load(&mut self) -> Result<(), PageError> {
        loop {
            let settled = self.settle();
            let loaded = self.load_pending_reform()?;
            if !settled && !loaded {
                return Ok(());
            }
        }
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        page_breadcrumbs(self.focus(), &self.metadata)
    }

    pub fn panel(&self) -> Option<Panel<'_>> {
        select_panel(self.ui.nav().focus(), &self.metadata, &self.policy)
    }

    pub fn snapshot(&self) -> PageSnapshot<'_> {
        let nav = self.ui.nav();
        PageSnapshot {
            location: nav.to_string(),
            focus: nav.focus(),
            reform: nav.reform(),
            breadcrumbs: self.breadcrumbs(),
            panel: self.panel(),
        }
    }

    /// Writes a reform override from user input and persists the reform when a folder is set.
    pub fn set_parameter(&mut self, parameter: &str, input: &str) -> Result<(), PageError> {
        if !self
            .metadata
            .parameter(parameter)
            .is_some_and(|entry| entry.is_parameter())
        {
            return Err(PageError::NotAParameter(parameter.to_owned()));
        }
        if !self.policy.set_parameter(parameter, parse_parameter_input(input)) {
            return Err(PageError::ReformNotLoaded);
        }
        self.persist_reform()
    }

    /// Removes a reform override. Returns whether one existed.
    pub fn clear_parameter(&mut self, parameter: &str) -> Result<bool, PageError> {
        if !self.policy.clear_parameter(parameter) {
            return Ok(false);
        }
        self.persist_reform()?;
        Ok(true)
    }

    fn persist_reform(&self) -> Result<(), PageError> {
        if let Some(folder) = &self.reforms {
            if let Err(err) = folder.save(&self.policy.reform) {
                warn!(error = %err, "failed to persist reform");
                return Err(err.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PageError, PolicyPage};
    use crate::model::{demo_metadata, ReformId};
    use crate::nav::{NavState, Panel, REFORM_KEY};
    use crate::store::ReformFolder;

    #[test]
    fn fresh_page_shows_loading_until_reform_loads() {
        let mut page = PolicyPage::new(demo_metadata(), None);
        assert!(page.settle());
        assert_eq!(page.focus(), "gov");
        assert_eq!(page.panel(), Some(Panel::Loading));

        assert!(page.load_pending_reform().unwrap());
        assert!(matches!(page.panel(), Some(Panel::FolderListing { label: "Government", .. })));
        assert!(!page.load_pending_reform().unwrap());
        assert!(!page.settle());
    }

    #[test]
    fn switching_reform_id_reloads() {
        let mut page = PolicyPage::new(demo_metadata(), None);
        page.settle_and_load().unwrap();
        assert_eq!(page.policy().reform.id(), Some(&ReformId::new("1").unwrap()));

        page.navigate(page.nav().with(REFORM_KEY, "5"));
        assert!(page.load_pending_reform().unwrap());
        assert_eq!(page.policy().reform.id(), Some(&ReformId::new("5").unwrap()));
    }

    #[test]
    fn invalid_reform_id_is_reported() {
        let nav = NavState::new("/uk/policy").with(REFORM_KEY, "a/b");
        let mut page = PolicyPage::with_nav(demo_metadata(), None, nav);
        assert!(matches!(
            page.load_pending_reform(),
            Err(PageError::InvalidReformId { .. })
        ));
    }

    #[test]
    fn edits_persist_to_reform_folder() {
        let dir = tempfile::tempdir().unwrap();
        let folder = ReformFolder::new(dir.path());
        let mut page = PolicyPage::new(demo_metadata(), Some(folder.clone()));
        page.settle_and_load().unwrap();

        page.set_parameter("gov.hmrc.income_tax.basic_rate", "0.22").unwrap();
        let stored = folder.load(&ReformId::new("1").unwrap()).unwrap();
        assert_eq!(
            stored.data().and_then(|data| data.get("gov.hmrc.income_tax.basic_rate")),
            Some(&json!(0.22))
        );

        assert!(page.clear_parameter("gov.hmrc.income_tax.basic_rate").unwrap());
        assert!(!page.clear_parameter("gov.hmrc.income_tax.basic_rate").unwrap());
    }

    #[test]
    fn edits_reject_folders_and_unloaded_reforms() {
        let mut page = PolicyPage::new(demo_metadata(), None);
        assert!(matches!(
            page.set_parameter("gov.hmrc", "1"),
            Err(PageError::NotAParameter(_))
        ));
        assert!(matches!(
            page.set_parameter("gov.hmrc.income_tax.basic_rate", "1"),
            Err(PageError::ReformNotLoaded)
        ));
    }

    #[test]
    fn snapshot_serializes_page() {
        let mut page = PolicyPage::new(demo_metadata(), None);
        page.settle_and_load().unwrap();
        page.set_focus("policyOutput");

        let json = serde_json::to_value(page.snapshot()).unwrap();
        assert_eq!(json["location"], "/uk/policy?focus=policyOutput&reform=1");
        assert_eq!(json["breadcrumbs"][0]["label"], "Policy impact");
        assert_eq!(json["panel"]["panel"], "outputFolderListing");
        assert_eq!(json["panel"]["children"].as_array().map(Vec::len), Some(7));
    }
}
