use std::time::Duration;
use svcmetrics::prelude::*;
use svcmetrics::{SpyMetricSink, StatsdClient};

mod utils;
use utils::{run_arc_threaded_test, DATAGRAMS_PER_ITERATION, NUM_ITERATIONS, NUM_THREADS};

fn drain(rx: &crossbeam_channel::Receiver<Vec<u8>>) -> Vec<String> {
    rx.try_iter().map(|v| String::from_utf8(v).unwrap()).collect()
}

#[test]
fn test_statsd_client_spy_sink_single_threaded() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("svcmetrics", sink);
    run_arc_threaded_test(client, 1, 1);

    assert_eq!(DATAGRAMS_PER_ITERATION as usize, rx.try_iter().count());
}

#[test]
fn test_statsd_client_spy_sink_timeit() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("svc", sink);

    let out = client.timeit("render", || {
        std::thread::sleep(Duration::from_millis(5));
        42
    });

    assert_eq!(42, out);
    let sent = drain(&rx);
    assert_eq!(1, sent.len());
    assert!(sent[0].starts_with("svc.render:"));
    assert!(sent[0].ends_with("|ms"));
}

#[test]
fn test_statsd_client_spy_sink_emitted_is_per_call() {
    let (_rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("", sink);

    client.gauge(["a", "b"], 1).unwrap();
    let emitted = client.increment("c").unwrap();

    assert_eq!(vec!["c:1|c"], emitted.payloads());
}

#[test]
fn test_statsd_client_spy_sink_full_goes_to_handler() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let errors = Arc::new(AtomicUsize::new(0));
    let errors_ref = errors.clone();

    let (rx, sink) = SpyMetricSink::with_capacity(1);
    let client = StatsdClient::builder("", sink)
        .with_error_handler(move |_e| {
            errors_ref.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    let emitted = client.increment(["a", "b", "c"]).unwrap();

    assert_eq!(3, emitted.len());
    assert_eq!(2, errors.load(Ordering::SeqCst));
    assert_eq!(vec!["a:1|c"], drain(&rx));
}

#[ignore]
#[test]
fn test_statsd_client_spy_sink_many_threaded() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("svcmetrics", sink);
    run_arc_threaded_test(client, NUM_THREADS, NUM_ITERATIONS);

    assert_eq!(
        (NUM_THREADS * NUM_ITERATIONS * DATAGRAMS_PER_ITERATION) as usize,
        rx.try_iter().count()
    );
}
