//! Benchmarks for the built-in rules and the registry driver
//!
//! Measures:
//! - Slug and number-list scanning on short and long inputs
//! - Compare with numeric and string operands
//! - Full registry validation of one object

use criterion::{Criterion, criterion_group, criterion_main};
use fieldrules::prelude::*;
use serde_json::json;
use std::hint::black_box;

fn format_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules/format");

    let slug = is_slug();
    let long_slug = "segment-".repeat(64);
    group.bench_function("slug_short", |b| b.iter(|| slug.is_slug(black_box("hello-world"))));
    group.bench_function("slug_long", |b| b.iter(|| slug.is_slug(black_box(&long_slug))));

    let list = is_number_list();
    let long_list = (0..256).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
    group.bench_function("number_list_short", |b| {
        b.iter(|| list.is_number_list(black_box("1,2.5,-3")));
    });
    group.bench_function("number_list_long", |b| {
        b.iter(|| list.is_number_list(black_box(&long_list)));
    });

    group.finish();
}

fn compare_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules/compare");
    let numbers = json!({ "min": 1, "max": 5 });
    let strings = json!({ "min": "alpha", "max": "omega" });
    let rule = compare("min", CompareOptions::GreaterThan);

    for (name, doc) in [("numbers", &numbers), ("strings", &strings)] {
        let object = doc.as_object().unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let args = ValidationArguments::new("Range", object, "max");
                black_box(rule.validate(args.value, &args))
            });
        });
    }

    group.finish();
}

fn registry_validate(c: &mut Criterion) {
    let mut registry = RuleRegistry::new();
    registry
        .register("Article", "slug", is_slug())
        .register("Article", "slug", is_not_null())
        .register("Article", "tagIds", is_number_list())
        .register("Article", "publishedAt", is_not_undefined())
        .register(
            "Article",
            "updatedAt",
            compare("publishedAt", CompareOptions::GreaterThanOrEqual),
        );

    let valid = json!({ "slug": "a-b", "tagIds": "1,2", "publishedAt": 1, "updatedAt": 2 });
    let invalid = json!({ "slug": "a b", "tagIds": "x", "updatedAt": 0 });

    let mut group = c.benchmark_group("registry/validate");
    group.bench_function("valid", |b| b.iter(|| registry.validate("Article", black_box(&valid))));
    group.bench_function("invalid", |b| {
        b.iter(|| registry.validate("Article", black_box(&invalid)));
    });
    group.finish();
}

criterion_group!(benches, format_rules, compare_rule, registry_validate);
criterion_main!(benches);
