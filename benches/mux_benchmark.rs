/*!
 * Multiplexing overhead benchmark
 *
 * Measures scheduling and translation cost over an always-ready adapter,
 * isolating the multiplexer's own overhead from native wait latency.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::time::Duration;
use waitmux::{Handle, NativeStatus, NativeWait, WaitMode, WaitMux};

struct AlwaysReady;

impl NativeWait for AlwaysReady {
    fn wait(&self, _: &[Handle], _: WaitMode, _: Option<Duration>) -> NativeStatus {
        NativeStatus::Signaled(0)
    }

    fn name(&self) -> &'static str {
        "always_ready"
    }
}

fn bench_any_mode(c: &mut Criterion) {
    let mux = WaitMux::with_defaults(Arc::new(AlwaysReady));
    let mut group = c.benchmark_group("wait_any");

    for n in [3usize, 70, 508] {
        let handles: Vec<Handle> = (1..=n).map(Handle).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &handles, |b, handles| {
            b.iter(|| {
                mux.wait(
                    black_box(handles),
                    WaitMode::Any,
                    Some(Duration::from_millis(50)),
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_all_mode(c: &mut Criterion) {
    let mux = WaitMux::with_defaults(Arc::new(AlwaysReady));
    let mut group = c.benchmark_group("wait_all");

    for n in [3usize, 508] {
        let handles: Vec<Handle> = (1..=n).map(Handle).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &handles, |b, handles| {
            b.iter(|| {
                mux.wait(
                    black_box(handles),
                    WaitMode::All,
                    Some(Duration::from_millis(50)),
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_any_mode, bench_all_mode);
criterion_main!(benches);
