// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use policyscope::model::{
    CountryId, Metadata, ParameterMeta, Policy, Reform, ReformData, ReformId, TreeNode,
};
use policyscope::nav::{resolve_breadcrumbs, select_panel};

fn build_tree(name: String, depth: usize, fanout: usize) -> TreeNode {
    let node = TreeNode::new(name.clone(), format!("Label {name}"));
    if depth == 0 {
        return node;
    }
    node.with_children(
        (0..fanout).map(|idx| build_tree(format!("{name}.n{idx}"), depth - 1, fanout)),
    )
}

fn collect_parameters(node: &TreeNode, out: &mut BTreeMap<String, ParameterMeta>) {
    let meta = if node.is_leaf() {
        ParameterMeta::parameter(node.name(), node.label())
    } else {
        ParameterMeta::node(node.name(), node.label())
    };
    out.insert(node.name().to_owned(), meta);
    for child in node.children() {
        collect_parameters(child, out);
    }
}

fn fixture(depth: usize, fanout: usize) -> (Metadata, String) {
    let parameter_tree = build_tree("gov".to_owned(), depth, fanout);
    let mut parameters = BTreeMap::new();
    collect_parameters(&parameter_tree, &mut parameters);

    let mut focus = "gov".to_owned();
    for _ in 0..depth {
        focus.push_str(&format!(".n{}", fanout - 1));
    }

    let metadata = Metadata {
        country_id: CountryId::new("uk").expect("country id"),
        parameters,
        parameter_tree,
    };
    (metadata, focus)
}

// Case IDs stay stable so results remain comparable across refactors.
fn benches_focus(c: &mut Criterion) {
    let cases = [
        ("shallow_wide", 2, 40),
        ("medium", 5, 6),
        ("deep_narrow", 12, 2),
    ];

    {
        let mut group = c.benchmark_group("nav.resolve_breadcrumbs");
        for (case_id, depth, fanout) in cases {
            let (metadata, focus) = fixture(depth, fanout);
            group.throughput(Throughput::Elements(depth as u64 + 1));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let roots = black_box(metadata.parameter_roots());
                    let crumbs = resolve_breadcrumbs(black_box(&focus), roots);
                    black_box(crumbs.len())
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("nav.select_panel");
        let policy = Policy {
            reform: Reform::loaded(ReformId::new("1").expect("reform id"), ReformData::new()),
        };
        for (case_id, depth, fanout) in cases {
            let (metadata, focus) = fixture(depth, fanout);
            // Parent of the deepest leaf, so the folder-listing walk runs.
            let folder = focus.rsplit_once('.').map_or(focus.clone(), |(head, _)| head.to_owned());
            let policy = policy.clone();
            group.throughput(Throughput::Elements(depth as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let panel = select_panel(black_box(&folder), &metadata, &policy);
                    black_box(panel.map(|panel| panel.kind()))
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benches_focus);
criterion_main!(benches);
