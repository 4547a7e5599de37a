use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use pretty_assertions::assert_eq;
use rand::distributions;
use rand::prelude::Distribution;
use sortkit::{comparators, compose_comparators, Comparators};

const KEY_RANGE: u32 = 1000;
const NUM_TEST_THREADS: usize = 4;
const NUM_SORTS_PER_THREAD: usize = 25;
const NUM_VALUES_PER_SORT: usize = 500;

/// A struct holding a thread that repeatedly sorts random data with shared comparators.
struct Worker {
    /// A number uniquely identifying this thread.
    thread_id: usize,

    /// A handle to the actual thread.
    thread_handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Create a new [`Worker`] instance and start sorting.
    fn new(
        thread_id: usize,
        composed: &Comparators<'static, (u32, u32)>,
        sorts_completed: Arc<AtomicUsize>,
    ) -> Self {
        log::info!("Starting test worker thread with id {thread_id}");
        let composed = composed.clone();
        let thread_handle = thread::Builder::new()
            .name(thread_id.to_string())
            .spawn(move || {
                let mut rng = rand::thread_rng();
                let uniform_dist = distributions::Uniform::from(0..KEY_RANGE);

                for _ in 0..NUM_SORTS_PER_THREAD {
                    let mut values: Vec<(u32, u32)> = (0..NUM_VALUES_PER_SORT)
                        .map(|_| (uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng)))
                        .collect();

                    values.sort_by(composed.asc());
                    for window in values.windows(2) {
                        assert_ne!(composed.asc()(&window[0], &window[1]), Ordering::Greater);
                    }

                    values.sort_by(composed.desc());
                    for window in values.windows(2) {
                        assert_ne!(composed.desc()(&window[0], &window[1]), Ordering::Greater);
                    }

                    sorts_completed.fetch_add(1, AtomicOrdering::AcqRel);
                }

                log::info!("Thread {thread_id} finished sorting");
            })
            .unwrap();

        Self {
            thread_id,
            thread_handle: Some(thread_handle),
        }
    }

    /// Wait for the worker thread to finish.
    fn join(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            log::info!("Waiting for worker thread {} to finish", self.thread_id);
            handle.join().unwrap();
        }
    }
}

fn setup() {
    let _ = env_logger::builder()
        // Include all events in tests
        .filter_level(log::LevelFilter::max())
        // Ensure events are captured by `cargo test`
        .is_test(true)
        // Ignore errors initializing the logger if tests race to configure it
        .try_init();
}

#[test]
fn multiple_threads_can_sort_with_shared_comparators() {
    setup();

    let by_first = comparators(|value: &(u32, u32)| value.0);
    let by_second = comparators(|value: &(u32, u32)| value.1);
    let composed = compose_comparators(vec![by_first.asc_fn(), by_second.desc_fn()]).unwrap();
    let sorts_completed = Arc::new(AtomicUsize::new(0));

    let mut workers: Vec<Worker> = (0..NUM_TEST_THREADS)
        .map(|thread_id| Worker::new(thread_id, &composed, Arc::clone(&sorts_completed)))
        .collect();

    for worker in workers.iter_mut() {
        worker.join();
    }

    assert_eq!(
        sorts_completed.load(AtomicOrdering::Acquire),
        NUM_TEST_THREADS * NUM_SORTS_PER_THREAD
    );
}

#[test]
fn comparison_handles_can_be_sent_to_other_threads() {
    setup();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let by_value = comparators(move |value: &u32| {
        counter.fetch_add(1, AtomicOrdering::AcqRel);
        *value
    });

    let handles: Vec<JoinHandle<()>> = (0..NUM_TEST_THREADS)
        .map(|_| {
            let compare = by_value.asc_fn();
            thread::spawn(move || {
                assert_eq!(compare(&1, &2), Ordering::Less);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every comparison extracts exactly two keys
    assert_eq!(calls.load(AtomicOrdering::Acquire), 2 * NUM_TEST_THREADS);
}
