// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compares the state-gated transition function against unconditional class
//! sync over synthetic scroll traces. Host class mutation scans a class list,
//! so the gated machine should win whenever traces dwell on one side of the
//! zero edge.

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use overstory_appbar::adapter::AppBarAdapter;
use overstory_appbar::classes;
use overstory_appbar::foundation::Foundation;

/// Host whose class mutation cost scales with the class list, like a real
/// element's class attribute.
#[derive(Clone, Debug, Default)]
struct ListHost {
    classes: Vec<String>,
    scroll_y: f64,
}

impl ListHost {
    fn short_with_padding(padding: usize) -> Self {
        let mut classes = vec![classes::SHORT.to_string()];
        for i in 0..padding {
            classes.push(format!("theme-marker-{i}"));
        }
        Self {
            classes,
            scroll_y: 0.0,
        }
    }
}

impl AppBarAdapter for ListHost {
    fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
    fn add_class(&mut self, name: &str) {
        if !self.has_class(name) {
            self.classes.push(name.to_string());
        }
    }
    fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }
    fn viewport_scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Scroll trace that dwells away from the top, returning to zero roughly once
/// every `rest_period` samples.
fn gen_trace(len: usize, rest_period: u64, seed: u64) -> Vec<f64> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        let r = rng.next_u64();
        if r % rest_period == 0 {
            out.push(0.0);
        } else {
            out.push(((r >> 32) % 4096) as f64 + 1.0);
        }
    }
    out
}

/// Baseline: sync the collapse marker on every notification, no state gate.
fn unconditional_sync(host: &mut ListHost) {
    if host.viewport_scroll_y() == 0.0 {
        host.remove_class(classes::SHORT_COLLAPSED);
    } else {
        host.add_class(classes::SHORT_COLLAPSED);
    }
}

fn bench_collapse(c: &mut Criterion) {
    let trace = gen_trace(4096, 16, 0x5eed);
    let padding = 24;

    let mut group = c.benchmark_group("collapse");
    group.throughput(Throughput::Elements(trace.len() as u64));

    group.bench_function("gated", |b| {
        b.iter_batched(
            || {
                let mut f = Foundation::new(ListHost::short_with_padding(padding));
                f.init();
                f
            },
            |mut f| {
                for &y in &trace {
                    f.adapter_mut().scroll_y = y;
                    f.handle_scroll();
                }
                black_box(f.is_collapsed())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("unconditional", |b| {
        b.iter_batched(
            || ListHost::short_with_padding(padding),
            |mut host| {
                for &y in &trace {
                    host.scroll_y = y;
                    unconditional_sync(&mut host);
                }
                black_box(host.classes.len())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_collapse);
criterion_main!(benches);
