//! Benchmarks for visibility set mutation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use homescreen::models::SectionKind;
use homescreen::state::VisibilitySet;

/// Insert every kind in reverse priority order, then remove them again.
fn bench_add_remove_all(c: &mut Criterion) {
    c.bench_function("visibility_add_remove_all", |b| {
        b.iter(|| {
            let mut set = VisibilitySet::new();
            for kind in SectionKind::ALL.iter().rev() {
                set.add(black_box(*kind));
            }
            for kind in SectionKind::ALL {
                set.remove(black_box(kind));
            }
            set
        })
    });
}

/// Toggle one section in and out of an otherwise full set.
fn bench_toggle_middle(c: &mut Criterion) {
    let full = VisibilitySet::from_kinds(SectionKind::ALL);
    c.bench_function("visibility_toggle_middle", |b| {
        b.iter(|| {
            let mut set = full.clone();
            set.remove(black_box(SectionKind::JumpBackIn));
            set.add(black_box(SectionKind::JumpBackIn));
            set
        })
    });
}

criterion_group!(benches, bench_add_remove_all, bench_toggle_middle);
criterion_main!(benches);
