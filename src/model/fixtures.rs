// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde_json::json;

use super::ids::CountryId;
use super::metadata::{Metadata, ParameterMeta};
use super::tree::TreeNode;

fn leaf(name: &str, label: &str) -> TreeNode {
    TreeNode::new(name, label)
}

fn valued(
    name: &str,
    label: &str,
    unit: &str,
    description: &str,
    values: &[(&str, serde_json::Value)],
) -> ParameterMeta {
    let mut meta = ParameterMeta::parameter(name, label);
    meta.unit = Some(unit.to_owned());
    meta.description = Some(description.to_owned());
    meta.values = values
        .iter()
        .map(|(date, value)| ((*date).to_owned(), value.clone()))
        .collect();
    meta
}

/// Built-in metadata used by `--demo`-style runs and tests: a small UK-flavoured parameter tree.
pub fn demo_metadata() -> Metadata {
    demo_metadata_for("uk")
}

pub(crate) fn demo_metadata_for(country: &str) -> Metadata {
    let parameter_tree = TreeNode::new("gov", "Government").with_children([
        TreeNode::new("gov.hmrc", "HMRC").with_children([
            TreeNode::new("gov.hmrc.income_tax", "Income Tax").with_children([
                leaf("gov.hmrc.income_tax.basic_rate", "Basic rate"),
                leaf("gov.hmrc.income_tax.higher_rate", "Higher rate"),
                leaf("gov.hmrc.income_tax.personal_allowance", "Personal allowance"),
            ]),
            TreeNode::new("gov.hmrc.child_benefit", "Child Benefit")
                .with_children([leaf("gov.hmrc.child_benefit.eldest", "Eldest child amount")]),
        ]),
        TreeNode::new("gov.dwp", "DWP").with_children([TreeNode::new(
            "gov.dwp.universal_credit",
            "Universal Credit",
        )
        .with_children([
            leaf("gov.dwp.universal_credit.standard_allowance", "Standard allowance"),
            leaf("gov.dwp.universal_credit.taper_rate", "Taper rate"),
        ])]),
    ]);

    let mut parameters = BTreeMap::new();
    for (name, label) in [
        ("gov", "Government"),
        ("gov.hmrc", "HMRC"),
        ("gov.hmrc.income_tax", "Income Tax"),
        ("gov.hmrc.child_benefit", "Child Benefit"),
        ("gov.dwp", "DWP"),
        ("gov.dwp.universal_credit", "Universal Credit"),
    ] {
        parameters.insert(name.to_owned(), ParameterMeta::node(name, label));
    }
    for meta in [
        valued(
            "gov.hmrc.income_tax.basic_rate",
            "Basic rate",
            "/1",
            "Income tax rate applied to the basic rate band.",
            &[("2021-04-06", json!(0.2))],
        ),
        valued(
            "gov.hmrc.income_tax.higher_rate",
            "Higher rate",
            "/1",
            "Income tax rate applied to the higher rate band.",
            &[("2021-04-06", json!(0.4))],
        ),
        valued(
            "gov.hmrc.income_tax.personal_allowance",
            "Personal allowance",
            "currency-GBP",
            "Income below this amount is not taxed.",
            &[("2021-04-06", json!(12_570))],
        ),
        valued(
            "gov.hmrc.child_benefit.eldest",
            "Eldest child amount",
            "currency-GBP",
            "Weekly Child Benefit for the eldest or only child.",
            &[("2022-04-11", json!(21.8)), ("2023-04-10", json!(24.0))],
        ),
        valued(
            "gov.dwp.universal_credit.standard_allowance",
            "Standard allowance",
            "currency-GBP",
            "Monthly standard allowance for a single claimant aged 25 or over.",
            &[("2023-04-10", json!(368.74))],
        ),
        valued(
            "gov.dwp.universal_credit.taper_rate",
            "Taper rate",
            "/1",
            "Rate at which Universal Credit is withdrawn as earnings rise.",
            &[("2021-11-24", json!(0.55))],
        ),
    ] {
        parameters.insert(meta.parameter.clone(), meta);
    }

    Metadata {
        country_id: CountryId::new(country).expect("fixture country id"),
        parameters,
        parameter_tree,
    }
}
