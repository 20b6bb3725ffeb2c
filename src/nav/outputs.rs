// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use crate::model::TreeNode;

pub const POLICY_OUTPUT_ROOT: &str = "policyOutput";
pub const POLICY_OUTPUT_LABEL: &str = "Policy impact";
pub const NET_INCOME_OUTPUT: &str = "policyOutput.netIncome";

const POLICY_OUTPUTS: [(&str, &str); 7] = [
    (NET_INCOME_OUTPUT, "Budgetary impact"),
    ("policyOutput.decileRelativeImpact", "Relative impact by decile"),
    ("policyOutput.decileAverageImpact", "Average impact by decile"),
    ("policyOutput.intraDecileImpact", "Outcomes by income decile"),
    ("policyOutput.povertyImpact", "Poverty impact"),
    ("policyOutput.cliffImpact", "Cliff impact"),
    ("policyOutput.codeReproducibility", "Reproduce in Python"),
];

fn policy_output_roots_cell() -> &'static [TreeNode; 1] {
    static ROOTS: OnceLock<[TreeNode; 1]> = OnceLock::new();
    ROOTS.get_or_init(|| {
        [TreeNode::new(POLICY_OUTPUT_ROOT, POLICY_OUTPUT_LABEL).with_children(
            POLICY_OUTPUTS
                .iter()
                .map(|(name, label)| TreeNode::new(*name, *label)),
        )]
    })
}

/// The fixed policy-output tree.
pub fn policy_output_tree() -> &'static TreeNode {
    &policy_output_roots_cell()[0]
}

/// Container whose only child is the policy-output tree; the breadcrumb root for output focus.
pub fn policy_output_roots() -> &'static [TreeNode] {
    policy_output_roots_cell()
}

/// The seven output categories, in display order.
pub fn policy_output_children() -> &'static [TreeNode] {
    policy_output_tree().children()
}

#[cfg(test)]
mod tests {
    use super::{policy_output_children, policy_output_tree, POLICY_OUTPUT_ROOT};

    #[test]
    fn output_tree_has_seven_children_in_order() {
        let names = policy_output_children()
            .iter()
            .map(|node| node.local_name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "netIncome",
                "decileRelativeImpact",
                "decileAverageImpact",
                "intraDecileImpact",
                "povertyImpact",
                "cliffImpact",
                "codeReproducibility",
            ]
        );
    }

    #[test]
    fn output_children_are_prefixed_by_root() {
        let root = policy_output_tree();
        assert_eq!(root.name(), POLICY_OUTPUT_ROOT);
        assert!(root
            .children()
            .iter()
            .all(|child| child.name().starts_with("policyOutput.")));
    }
}
