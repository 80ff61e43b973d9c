use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockgrid_catalog::Catalog;
use stockgrid_core::RowId;
use stockgrid_grid::{Edit, EditRules, Reconciler, Row};

fn catalog_with_options(per_category: usize) -> Catalog {
    let options: Vec<(String, u64)> = (0..per_category)
        .map(|i| (format!("Option {i}"), 100 + i as u64))
        .collect();
    Catalog::builder()
        .category("Electronics", options.clone())
        .category("Office", options)
        .build()
        .unwrap()
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    group.throughput(Throughput::Elements(1));

    for per_category in [4usize, 64, 1024] {
        let catalog = catalog_with_options(per_category);
        let rules = EditRules::default();
        let reconciler = Reconciler::new(&catalog, &rules);
        let row = Row::new(RowId::new(1), "Electronics", "Option 0", 2, true, &catalog).unwrap();

        group.bench_with_input(
            BenchmarkId::new("quantity_edit", per_category),
            &per_category,
            |b, _| {
                let edit = Edit::set_quantity(row.id(), 7);
                b.iter(|| reconciler.reconcile(black_box(&row), black_box(&edit)).unwrap());
            },
        );

        // Worst case: the picked label is the last option.
        let last = format!("Option {}", per_category - 1);
        group.bench_with_input(
            BenchmarkId::new("attribute_edit", per_category),
            &per_category,
            |b, _| {
                let edit = Edit::set_attribute(row.id(), last.as_str());
                b.iter(|| reconciler.reconcile(black_box(&row), black_box(&edit)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("category_edit", per_category),
            &per_category,
            |b, _| {
                let edit = Edit::set_category(row.id(), "Office");
                b.iter(|| reconciler.reconcile(black_box(&row), black_box(&edit)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
