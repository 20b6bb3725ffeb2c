// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Policyscope: a terminal policy page.
//!
//! A dotted focus path (`gov.hmrc.income_tax`) selects where the user is; the crate turns it into
//! breadcrumbs, picks the content panel, keeps the navigation state valid and renders it all in a
//! ratatui shell.

pub mod config;
pub mod logging;
pub mod model;
pub mod nav;
pub mod page;
pub mod store;
pub mod tui;
pub mod ui;
