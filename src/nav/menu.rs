// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation surfaces around the main panel: the stacked sidebar menu, parameter search and the
//! narrow-layout bottom buttons.

use super::outputs::{NET_INCOME_OUTPUT, POLICY_OUTPUT_ROOT};
use super::query::NavState;
use crate::model::{Metadata, TreeNode};

const HOUSEHOLD_FOCUS: &str = "input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSection {
    Parameters,
    Outputs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow<'a> {
    pub node: &'a TreeNode,
    pub section: MenuSection,
    pub depth: usize,
    pub selected: bool,
    pub expanded: bool,
}

/// Flattens the two menu trees depth-first. Only nodes on the path to `selected` are expanded.
pub fn stacked_menu_rows<'a>(
    first: &'a [TreeNode],
    second: &'a [TreeNode],
    selected: &str,
) -> Vec<MenuRow<'a>> {
    let mut rows = Vec::new();
    push_rows(&mut rows, first, MenuSection::Parameters, 0, selected);
    push_rows(&mut rows, second, MenuSection::Outputs, 0, selected);
    rows
}

fn push_rows<'a>(
    rows: &mut Vec<MenuRow<'a>>,
    nodes: &'a [TreeNode],
    section: MenuSection,
    depth: usize,
    selected: &str,
) {
    for node in nodes {
        let expanded = !node.is_leaf() && node.is_on_path_to(selected);
        rows.push(MenuRow {
            node,
            section,
            depth,
            selected: node.name() == selected,
            expanded,
        });
        if expanded {
            push_rows(rows, node.children(), section, depth + 1, selected);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

/// Every editable parameter with a non-empty name and label.
pub fn parameter_search_options(metadata: &Metadata) -> Vec<SearchOption<'_>> {
    metadata
        .parameters
        .values()
        .filter(|entry| entry.is_parameter())
        .map(|entry| SearchOption {
            value: entry.parameter.as_str(),
            label: entry.label.as_str(),
        })
        .filter(|option| !option.label.is_empty() && !option.value.is_empty())
        .collect()
}

/// Ranks options against `query`, best first.
///
/// Every whitespace-separated term must hit a word of the label or of a dotted segment of the
/// parameter name. Label words weigh most, then the leaf segment, then the rest of the path.
pub fn rank_search_options<'a>(options: &[SearchOption<'a>], query: &str) -> Vec<SearchOption<'a>> {
    let query = query.trim().to_lowercase();
    let terms = query.split_whitespace().collect::<Vec<_>>();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored = options
        .iter()
        .filter_map(|option| Some((option_score(&terms, option)?, *option)))
        .collect::<Vec<_>>();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| a.label.cmp(b.label))
            .then_with(|| a.value.cmp(b.value))
    });
    scored.into_iter().map(|(_, option)| option).collect()
}

const LABEL_WEIGHT: u32 = 3;
const LEAF_WEIGHT: u32 = 2;
const PATH_WEIGHT: u32 = 1;
const MIN_TYPO_RATIO: f64 = 0.75;

fn option_score(terms: &[&str], option: &SearchOption<'_>) -> Option<u32> {
    let label = option.label.to_lowercase();
    let value = option.value.to_lowercase();
    let mut segments = value.rsplit('.');
    let leaf = segments.next().unwrap_or("");
    let path = segments.collect::<Vec<_>>();

    let mut total = 0;
    for term in terms {
        let in_label = best_word_score(term, label.split_whitespace()).map(|s| s * LABEL_WEIGHT);
        let in_leaf = best_word_score(term, leaf.split('_')).map(|s| s * LEAF_WEIGHT);
        let path_words = path.iter().copied().flat_map(|segment| segment.split('_'));
        let in_path = best_word_score(term, path_words).map(|s| s * PATH_WEIGHT);
        total += [in_label, in_leaf, in_path].into_iter().flatten().max()?;
    }
    if terms.len() > 1 && label.contains(&terms.join(" ")) {
        total += 100 * LABEL_WEIGHT;
    }
    Some(total)
}

/// Exact word 100, prefix 90, infix 70, close typo up to 60.
fn best_word_score<'w>(term: &str, words: impl Iterator<Item = &'w str>) -> Option<u32> {
    words
        .filter(|word| !word.is_empty())
        .filter_map(|word| {
            if word == term {
                Some(100)
            } else if word.starts_with(term) {
                Some(90)
            } else if word.contains(term) {
                Some(70)
            } else {
                let ratio = rapidfuzz::fuzz::ratio(term.chars(), word.chars());
                (ratio >= MIN_TYPO_RATIO).then(|| (ratio * 60.0).round() as u32)
            }
        })
        .max()
}

/// A navigation button: sets focus and optionally leaves for another route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub text: &'static str,
    pub focus: &'static str,
    pub route: Option<String>,
}

impl NavButton {
    fn stay(text: &'static str, focus: &'static str) -> Self {
        Self {
            text,
            focus,
            route: None,
        }
    }

    #[must_use]
    pub fn apply(&self, nav: &NavState) -> NavState {
        let next = nav.with_focus(self.focus);
        match &self.route {
            Some(route) => next.with_path(route.clone()),
            None => next,
        }
    }
}

/// Buttons of the narrow-layout bottom menu, in display order.
pub fn bottom_menu_buttons(nav: &NavState, metadata: &Metadata) -> Vec<NavButton> {
    let focus = nav.focus();
    let mut buttons = Vec::new();
    if !focus.is_empty() {
        if focus.starts_with(POLICY_OUTPUT_ROOT) {
            buttons.push(NavButton::stay("Edit my policy", super::effects::DEFAULT_FOCUS));
        } else {
            buttons.push(NavButton::stay("Calculate economic impact", NET_INCOME_OUTPUT));
        }
    }

    let text = if nav.get(super::query::REFORM_KEY).is_some() {
        "Edit my household"
    } else {
        "Enter my household"
    };
    buttons.push(NavButton {
        text,
        focus: HOUSEHOLD_FOCUS,
        route: Some(household_route(metadata)),
    });
    buttons
}

pub fn household_route(metadata: &Metadata) -> String {
    format!("/{}/household", metadata.country_id)
}

pub fn policy_route(metadata: &Metadata) -> String {
    format!("/{}/policy", metadata.country_id)
}
