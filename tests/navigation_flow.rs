// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;

use rstest::rstest;
use serde_json::{json, Value};

use policyscope::model::{demo_metadata, Metadata, ReformId};
use policyscope::nav::{NavState, Panel, REFORM_KEY};
use policyscope::page::PolicyPage;
use policyscope::store::{MetadataFile, ReformFolder};

fn write_metadata(dir: &Path, country: &str) -> MetadataFile {
    let mut metadata = serde_json::to_value(demo_metadata()).expect("serialize metadata");
    metadata["countryId"] = Value::String(country.to_owned());
    let path = dir.join(format!("{country}.json"));
    std::fs::write(&path, serde_json::to_vec_pretty(&metadata).expect("json")).expect("write");
    MetadataFile::new(path)
}

fn settled_page(metadata: Metadata, location: &str) -> PolicyPage {
    let mut page = PolicyPage::with_nav(metadata, None, NavState::parse(location));
    page.settle_and_load().expect("settle and load");
    page
}

#[rstest]
#[case("uk", "1")]
#[case("us", "2")]
#[case("ca", "1")]
fn default_reform_depends_on_country(#[case] country: &str, #[case] reform: &str) {
    let dir = tempfile::tempdir().unwrap();
    let metadata = write_metadata(dir.path(), country).load().expect("load metadata");

    let page = settled_page(metadata, &format!("/{country}/policy"));
    assert_eq!(page.focus(), "gov");
    assert_eq!(page.nav().reform(), Some(reform));
    assert!(matches!(page.panel(), Some(Panel::FolderListing { .. })));
}

#[test]
fn explicit_reform_survives_settling() {
    let page = settled_page(demo_metadata(), "/uk/policy?focus=gov.dwp&reform=9");
    assert_eq!(page.nav().reform(), Some("9"));
    assert_eq!(page.policy().reform.id(), Some(&ReformId::new("9").unwrap()));
    assert_eq!(page.nav().to_string(), "/uk/policy?focus=gov.dwp&reform=9");
}

#[rstest]
#[case("gov.hmrc.income_tax.basic_rate", "parameterEditor")]
#[case("gov.hmrc", "folderListing")]
#[case("policyOutput", "outputFolderListing")]
#[case("policyOutput.povertyImpact", "outputDetail")]
fn focus_selects_panel(#[case] focus: &str, #[case] kind: &str) {
    let page = settled_page(demo_metadata(), &format!("/uk/policy?focus={focus}"));
    assert_eq!(page.panel().map(|panel| panel.kind()), Some(kind));
}

#[test]
fn unknown_focus_degrades_to_nothing() {
    let page = settled_page(demo_metadata(), "/uk/policy?focus=gov.nope.deeper");
    assert!(page.breadcrumbs().is_empty());
    assert_eq!(page.panel(), None);
}

#[test]
fn snapshot_reports_breadcrumbs_and_panel() {
    let page = settled_page(demo_metadata(), "/uk/policy?focus=gov.hmrc.income_tax");
    let snapshot = serde_json::to_value(page.snapshot()).expect("snapshot json");

    assert_eq!(snapshot["focus"], "gov.hmrc.income_tax");
    assert_eq!(snapshot["reform"], "1");
    assert_eq!(
        snapshot["breadcrumbs"],
        json!([
            {"name": "gov", "label": "Government"},
            {"name": "gov.hmrc", "label": "HMRC"},
            {"name": "gov.hmrc.income_tax", "label": "Income Tax"},
        ])
    );
    assert_eq!(snapshot["panel"]["panel"], "folderListing");
    assert_eq!(snapshot["panel"]["label"], "Income Tax");
}

#[test]
fn reform_edits_round_trip_through_folder() {
    let dir = tempfile::tempdir().unwrap();
    let folder = ReformFolder::new(dir.path().join("reforms"));

    let mut page = PolicyPage::with_nav(
        demo_metadata(),
        Some(folder.clone()),
        NavState::new("/uk/policy").with(REFORM_KEY, "3"),
    );
    page.settle_and_load().unwrap();
    page.set_parameter("gov.dwp.universal_credit.taper_rate", "0.5").unwrap();
    page.set_parameter("gov.hmrc.income_tax.personal_allowance", "15000").unwrap();

    let mut reopened = PolicyPage::with_nav(
        demo_metadata(),
        Some(folder),
        NavState::new("/uk/policy").with(REFORM_KEY, "3"),
    );
    reopened.settle_and_load().unwrap();
    assert_eq!(
        reopened.policy().parameter_value("gov.dwp.universal_credit.taper_rate"),
        Some(&json!(0.5))
    );
    assert_eq!(
        reopened.policy().parameter_value("gov.hmrc.income_tax.personal_allowance"),
        Some(&json!(15000))
    );
}
