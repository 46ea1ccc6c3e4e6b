use svcmetrics::prelude::*;
use svcmetrics::StatsdClient;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[allow(dead_code)]
pub const NUM_THREADS: u64 = 100;
#[allow(dead_code)]
pub const NUM_ITERATIONS: u64 = 1_000;

/// Number of datagrams each iteration of `run_arc_threaded_test` sends
#[allow(dead_code)]
pub const DATAGRAMS_PER_ITERATION: u64 = 9;

#[allow(dead_code)]
pub fn run_arc_threaded_test(client: StatsdClient, num_threads: u64, iterations: u64) {
    let shared_client = Arc::new(client);

    let threads: Vec<_> = (0..num_threads)
        .map(|_| {
            let local_client = Arc::clone(&shared_client);

            thread::spawn(move || {
                for i in 0..iterations {
                    local_client.count("some.counter", i as i64).unwrap();
                    local_client.increment("some.counter").unwrap();
                    local_client.decrement("some.counter").unwrap();
                    local_client.timing("some.timer", i).unwrap();
                    local_client.timing("some.timer", i as f64 + 0.5).unwrap();
                    local_client.gauge("some.gauge", i).unwrap();
                    local_client.gauge("some.gauge", i as f64).unwrap();
                    local_client.set_add("some.set", i as i64).unwrap();
                    local_client.timeit("some.closure", || thread::sleep(Duration::from_millis(1)));
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }
}
