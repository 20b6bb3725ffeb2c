// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Focus path resolution.
//!
//! A focus such as `gov.hmrc.income_tax` is walked one dotted segment at a time: the accumulated
//! prefix must name a child of the current scope, and that child becomes the next scope. A miss at
//! any depth resolves to nothing at all, never to a partial path.

use serde::Serialize;
use tracing::debug;

use super::outputs::{policy_output_roots, POLICY_OUTPUT_ROOT};
use crate::model::{find_by_name, Metadata, TreeNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Focus prefix up to and including this segment.
    pub name: String,
    pub label: String,
}

/// Picks the container to resolve `focus` against: the policy-output tree for output focus,
/// the parameter tree otherwise.
pub fn breadcrumb_root<'a>(focus: &str, metadata: &'a Metadata) -> &'a [TreeNode] {
    if focus.starts_with(POLICY_OUTPUT_ROOT) {
        policy_output_roots()
    } else {
        metadata.parameter_roots()
    }
}

/// Walks `focus` through `roots`, returning the matched node for every segment in root-to-leaf
/// order, or `None` when the focus is empty or any prefix is missing.
pub fn walk_focus_path<'a>(focus: &str, roots: &'a [TreeNode]) -> Option<Vec<&'a TreeNode>> {
    if focus.is_empty() {
        return None;
    }

    let mut scope = roots;
    let mut path = Vec::new();
    let mut stem_end = 0usize;
    for (idx, segment) in focus.split('.').enumerate() {
        if idx > 0 {
            stem_end += 1;
        }
        stem_end += segment.len();
        let stem = &focus[..stem_end];

        let node = find_by_name(scope, stem)?;
        path.push(node);
        scope = node.children();
    }
    Some(path)
}

/// Resolves `focus` against `roots` into breadcrumbs. Unresolvable focus yields an empty list.
pub fn resolve_breadcrumbs(focus: &str, roots: &[TreeNode]) -> Vec<Breadcrumb> {
    match walk_focus_path(focus, roots) {
        Some(path) => path
            .into_iter()
            .map(|node| Breadcrumb {
                name: node.name().to_owned(),
                label: node.label().to_owned(),
            })
            .collect(),
        None => {
            debug!(focus, "focus did not resolve to breadcrumbs");
            Vec::new()
        }
    }
}

/// Breadcrumbs for the policy page: root selection plus resolution.
pub fn page_breadcrumbs(focus: &str, metadata: &Metadata) -> Vec<Breadcrumb> {
    resolve_breadcrumbs(focus, breadcrumb_root(focus, metadata))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{breadcrumb_root, page_breadcrumbs, resolve_breadcrumbs, walk_focus_path};
    use crate::model::{demo_metadata, TreeNode};
    use crate::nav::outputs::POLICY_OUTPUT_ROOT;

    #[rstest]
    #[case("gov", 1)]
    #[case("gov.hmrc", 2)]
    #[case("gov.hmrc.income_tax", 3)]
    #[case("gov.hmrc.income_tax.basic_rate", 4)]
    #[case("policyOutput", 1)]
    #[case("policyOutput.povertyImpact", 2)]
    fn resolved_paths_have_one_crumb_per_segment(#[case] focus: &str, #[case] expected: usize) {
        let metadata = demo_metadata();
        let crumbs = page_breadcrumbs(focus, &metadata);

        assert_eq!(crumbs.len(), expected);
        assert_eq!(crumbs.last().map(|crumb| crumb.name.as_str()), Some(focus));
    }

    #[test]
    fn breadcrumbs_are_root_to_leaf_with_labels() {
        let metadata = demo_metadata();
        let crumbs = page_breadcrumbs("gov.dwp.universal_credit.taper_rate", &metadata);
        let pairs = crumbs
            .iter()
            .map(|crumb| (crumb.name.as_str(), crumb.label.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            [
                ("gov", "Government"),
                ("gov.dwp", "DWP"),
                ("gov.dwp.universal_credit", "Universal Credit"),
                ("gov.dwp.universal_credit.taper_rate", "Taper rate"),
            ]
        );
    }

    #[rstest]
    #[case("")]
    #[case("gov.bogus")]
    #[case("gov.hmrc.bogus.basic_rate")]
    #[case("gov..hmrc")]
    #[case("gov.hmrc.")]
    #[case(".gov")]
    #[case("policyOutput.unknown")]
    #[case("hmrc")]
    fn unresolvable_focus_yields_no_breadcrumbs(#[case] focus: &str) {
        let metadata = demo_metadata();
        assert!(page_breadcrumbs(focus, &metadata).is_empty());
    }

    #[test]
    fn output_prefix_selects_output_tree() {
        let metadata = demo_metadata();
        assert_eq!(
            breadcrumb_root("policyOutput.cliffImpact", &metadata)[0].name(),
            POLICY_OUTPUT_ROOT
        );
        assert_eq!(breadcrumb_root("gov", &metadata)[0].name(), "gov");
        // Prefix match, not segment match.
        assert_eq!(breadcrumb_root("policyOutputs", &metadata)[0].name(), POLICY_OUTPUT_ROOT);
    }

    #[test]
    fn lookup_only_searches_current_depth() {
        // `a.b` exists only as a grandchild, so it cannot match at depth two.
        let roots = [TreeNode::new("a", "A").with_children([TreeNode::new("a.x", "X")
            .with_children([TreeNode::new("a.b", "misplaced")])])];
        assert!(walk_focus_path("a.b", &roots).is_none());
        assert_eq!(resolve_breadcrumbs("a.x", &roots).len(), 2);
    }
}
