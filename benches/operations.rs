//! Benchmarks for list operations.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use todo_tui::todo::{SubmitOutcome, TodoList};

fn filled_list(count: usize) -> (TodoList, Vec<todo_tui::todo::ItemId>) {
    let mut list = TodoList::new();
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        list.set_draft(format!("task {i}"));
        if let SubmitOutcome::Added(id) = list.submit() {
            ids.push(id);
        }
    }
    (list, ids)
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_1000", |b| {
        b.iter(|| filled_list(black_box(1_000)))
    });
}

fn bench_edit_last(c: &mut Criterion) {
    let (mut list, ids) = filled_list(1_000);
    let last = ids[ids.len() - 1];

    c.bench_function("edit_last_of_1000", |b| {
        b.iter(|| {
            list.begin_edit(black_box(last));
            list.set_draft("updated");
            list.submit()
        })
    });
}

fn bench_remove_all(c: &mut Criterion) {
    c.bench_function("remove_all_1000", |b| {
        b.iter_batched(
            || filled_list(1_000),
            |(mut list, ids)| {
                for id in ids {
                    list.remove(id);
                }
                list
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_add, bench_edit_last, bench_remove_all);
criterion_main!(benches);
