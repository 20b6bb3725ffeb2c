// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Policy page navigation.
//!
//! Pure functions of (navigation state, metadata, policy): breadcrumb resolution, panel
//! selection, state corrections and the menus that write new focus values.

pub mod effects;
pub mod focus;
pub mod menu;
pub mod outputs;
pub mod panel;
pub mod query;

pub use effects::{default_reform_id, ensure_default_focus, ensure_reform, settle, DEFAULT_FOCUS};
pub use focus::{
    breadcrumb_root, page_breadcrumbs, resolve_breadcrumbs, walk_focus_path, Breadcrumb,
};
pub use menu::{
    bottom_menu_buttons, household_route, parameter_search_options, policy_route,
    rank_search_options, stacked_menu_rows, MenuRow, MenuSection, NavButton, SearchOption,
};
pub use outputs::{
    policy_output_children, policy_output_roots, policy_output_tree, NET_INCOME_OUTPUT,
    POLICY_OUTPUT_LABEL, POLICY_OUTPUT_ROOT,
};
pub use panel::{find_in_tree, select_panel, Panel};
pub use query::{NavState, FOCUS_KEY, REFORM_KEY};
