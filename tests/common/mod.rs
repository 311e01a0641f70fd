/*!
 * Shared test fixtures
 *
 * `FakeNative` emulates the bounded native primitive over plain integers:
 * readiness and abandonment are script-controlled, calls are counted, and
 * the per-call capacity is enforced exactly like the real primitive (too
 * many handles is a native failure, not a panic).
 */

// Not every test binary touches every fixture method
#![allow(dead_code)]

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use waitmux::{Handle, NativeStatus, NativeWait, WaitMode, NATIVE_CAP};

const ERROR_INVALID_PARAMETER: u32 = 87;

static TRACING: std::sync::Once = std::sync::Once::new();

/// Route the crate's structured logging through a per-test subscriber
///
/// Honors `RUST_LOG`; output is captured per test. Safe to call from every
/// test in a binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Default)]
pub struct FakeNative {
    ready: Mutex<HashSet<usize>>,
    abandoned: Mutex<HashSet<usize>>,
    calls: AtomicUsize,
}

impl FakeNative {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    pub fn with_ready<I: IntoIterator<Item = usize>>(raw: I) -> Self {
        let fake = Self::new();
        fake.ready.lock().extend(raw);
        fake
    }

    pub fn set_ready(&self, raw: usize) {
        self.ready.lock().insert(raw);
    }

    pub fn set_abandoned(&self, raw: usize) {
        self.abandoned.lock().insert(raw);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn poll(&self, handles: &[Handle], mode: WaitMode) -> Option<NativeStatus> {
        let ready = self.ready.lock();
        let abandoned = self.abandoned.lock();
        match mode {
            WaitMode::Any => {
                for (i, h) in handles.iter().enumerate() {
                    if abandoned.contains(&h.as_raw()) {
                        return Some(NativeStatus::Abandoned(i));
                    }
                    if ready.contains(&h.as_raw()) {
                        return Some(NativeStatus::Signaled(i));
                    }
                }
                None
            }
            WaitMode::All => {
                if let Some(i) = handles
                    .iter()
                    .position(|h| abandoned.contains(&h.as_raw()))
                {
                    return Some(NativeStatus::Abandoned(i));
                }
                if handles.iter().all(|h| ready.contains(&h.as_raw())) {
                    return Some(NativeStatus::Signaled(0));
                }
                None
            }
        }
    }
}

impl NativeWait for FakeNative {
    fn wait(&self, handles: &[Handle], mode: WaitMode, timeout: Option<Duration>) -> NativeStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if handles.is_empty() || handles.len() > NATIVE_CAP {
            return NativeStatus::Failed(ERROR_INVALID_PARAMETER);
        }

        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            if let Some(status) = self.poll(handles, mode) {
                return status;
            }
            match deadline {
                Some(d) => {
                    let now = Instant::now();
                    if now >= d {
                        return NativeStatus::TimedOut;
                    }
                    thread::sleep((d - now).min(Duration::from_millis(1)));
                }
                None => thread::sleep(Duration::from_millis(1)),
            }
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
