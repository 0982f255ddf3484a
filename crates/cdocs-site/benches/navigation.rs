//! Benchmarks for sidebar flattening and adjacency lookups.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cdocs_site::{SidebarItem, adjacent_pages, flatten};

/// Build a sidebar tree with specified depth and breadth.
fn create_sidebar(depth: usize, breadth: usize) -> Vec<SidebarItem> {
    fn create_level(prefix: &str, current_depth: usize, max_depth: usize, breadth: usize) -> Vec<SidebarItem> {
        (0..breadth)
            .map(|i| {
                let slug = format!("{prefix}/section-{i}");
                let mut item = SidebarItem::page(format!("Section {i}"), slug.clone());
                if current_depth < max_depth {
                    item.items = create_level(&slug, current_depth + 1, max_depth, breadth);
                }
                item
            })
            .collect()
    }

    create_level("docs", 1, depth, breadth)
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for (depth, breadth) in [(2, 10), (3, 10), (4, 6)] {
        let sidebar = create_sidebar(depth, breadth);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{depth}x{breadth}")),
            &sidebar,
            |b, sidebar| b.iter(|| flatten(sidebar)),
        );
    }

    group.finish();
}

fn bench_adjacent_pages(c: &mut Criterion) {
    let pages = flatten(&create_sidebar(3, 10));
    let last = pages.last().map(|p| p.slug.clone()).unwrap_or_default();

    let mut group = c.benchmark_group("adjacent_pages");

    group.bench_function("first", |b| {
        b.iter(|| adjacent_pages(&pages, "docs/section-0"))
    });

    group.bench_function("last", |b| b.iter(|| adjacent_pages(&pages, &last)));

    group.bench_function("miss", |b| {
        b.iter(|| adjacent_pages(&pages, "/nonexistent/page"))
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_adjacent_pages);
criterion_main!(benches);
