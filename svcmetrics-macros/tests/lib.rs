use crossbeam_channel::Receiver;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;
use svcmetrics::test::UdpListener;
use svcmetrics::{ClientConfig, SpyMetricSink, StatsdClient};
use svcmetrics_macros::{
    statsd_count, statsd_decr, statsd_gauge, statsd_incr, statsd_set, statsd_timeit, statsd_timing,
};

/// Tests in this file all replace the global client so they must not overlap
static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

fn lock_global() -> MutexGuard<'static, ()> {
    let guard = GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    svcmetrics_macros::reset_to_noop();
    guard
}

/// Install a client writing to a `SpyMetricSink` and return the channel it writes to
fn install_spy_client(prefix: &str) -> Receiver<Vec<u8>> {
    let (rx, sink) = SpyMetricSink::new();
    svcmetrics_macros::set_global_client(StatsdClient::from_sink(prefix, sink));
    rx
}

/// Get the all strings written to the sink so far, in order.
fn read_all_metrics(rx: &Receiver<Vec<u8>>) -> Vec<String> {
    rx.try_iter().map(|v| String::from_utf8(v).unwrap()).collect()
}

#[test]
fn test_noop_before_configure() {
    let _guard = lock_global();

    assert!(!svcmetrics_macros::is_configured());

    svcmetrics_macros::count("x", 1);
    svcmetrics_macros::increment("x");
    svcmetrics_macros::timing("x", 33);
    svcmetrics_macros::gauge("x", 23);
    svcmetrics_macros::set_add("x", "member");

    let res = svcmetrics_macros::timeit("x", || {
        thread::sleep(Duration::from_millis(10));
        "result"
    });
    assert_eq!("result", res);
}

#[test]
fn test_noop_swallows_invalid_input() {
    let _guard = lock_global();

    svcmetrics_macros::count("", 1);
    svcmetrics_macros::gauge("bad|key", 1);
    svcmetrics_macros::count_sampled("x", 1, f64::NAN);
    assert_eq!(3, svcmetrics_macros::timeit("", || 3));
}

#[test]
fn test_macros() {
    let _guard = lock_global();
    let rx = install_spy_client("my.prefix");

    statsd_count!("some.counter", 123);
    statsd_count!("some.counter");
    statsd_incr!("some.counter");
    statsd_decr!("some.counter");
    statsd_timing!("some.timer", 334);
    statsd_timing!("some.timer", 12.5);
    statsd_gauge!("some.gauge", 42);
    statsd_gauge!("some.gauge", 0.5);
    statsd_set!("some.set", 7);
    statsd_set!("some.set", "user-7");

    assert_eq!(
        vec![
            "my.prefix.some.counter:123|c",
            "my.prefix.some.counter:1|c",
            "my.prefix.some.counter:1|c",
            "my.prefix.some.counter:-1|c",
            "my.prefix.some.timer:334|ms",
            "my.prefix.some.timer:12.5|ms",
            "my.prefix.some.gauge:42|g",
            "my.prefix.some.gauge:0.5|g",
            "my.prefix.some.set:7|s",
            "my.prefix.some.set:user-7|s",
        ],
        read_all_metrics(&rx)
    );
}

#[test]
fn test_sampled_macros() {
    let _guard = lock_global();
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::builder("sampled", sink)
        .with_random_source(|| 0.2)
        .build()
        .unwrap();
    svcmetrics_macros::set_global_client(client);

    statsd_count!("kept", 5, 0.5);
    statsd_incr!("kept", 0.5);
    statsd_decr!("kept", 0.5);
    statsd_incr!("dropped", 0.1);

    assert_eq!(
        vec!["sampled.kept:5|c|@0.5", "sampled.kept:1|c|@0.5", "sampled.kept:-1|c|@0.5"],
        read_all_metrics(&rx)
    );
}

#[test]
fn test_timeit_macro() {
    let _guard = lock_global();
    let rx = install_spy_client("app");

    let value = statsd_timeit!("work", {
        thread::sleep(Duration::from_millis(100));
        "done"
    });
    assert_eq!("done", value);

    let metrics = read_all_metrics(&rx);
    assert_eq!(1, metrics.len());

    let millis: f64 = metrics[0]
        .strip_prefix("app.work:")
        .and_then(|s| s.strip_suffix("|ms"))
        .unwrap()
        .parse()
        .unwrap();
    assert!((90.0..=200.0).contains(&millis), "unexpected timing: {}", millis);
}

#[test]
fn test_timeit_records_when_panicking() {
    let _guard = lock_global();
    let rx = install_spy_client("app");

    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        svcmetrics_macros::timeit("explodes", || -> u8 { panic!("boom") })
    }));

    assert!(res.is_err());
    let metrics = read_all_metrics(&rx);
    assert_eq!(1, metrics.len());
    assert!(metrics[0].starts_with("app.explodes:"));
}

#[test]
fn test_timed_wrappers() {
    let _guard = lock_global();

    // Created while no client is configured, uses the global client at call time
    let mut plain = svcmetrics_macros::timed("handler", || 1);
    let mut prefixed = svcmetrics_macros::timed_with_prefix("mymetrics", "handler", || 2);
    let mut with_arg = svcmetrics_macros::timed_with_arg("double", |v: u32| v * 2);

    assert_eq!(1, plain());

    let rx = install_spy_client("");

    assert_eq!(1, plain());
    assert_eq!(2, prefixed());
    assert_eq!(8, with_arg(4));

    let keys: Vec<String> = read_all_metrics(&rx)
        .into_iter()
        .map(|m| m.split(':').next().unwrap().to_owned())
        .collect();
    assert_eq!(vec!["handler", "mymetrics.handler", "double"], keys);
}

#[test]
fn test_reset_to_noop() {
    let _guard = lock_global();
    let rx = install_spy_client("app");

    assert!(svcmetrics_macros::is_configured());
    svcmetrics_macros::increment("before");

    svcmetrics_macros::reset_to_noop();

    assert!(!svcmetrics_macros::is_configured());
    svcmetrics_macros::increment("after");

    assert_eq!(vec!["app.before:1|c"], read_all_metrics(&rx));
}

#[test]
fn test_global_client_handle_outlives_swap() {
    let _guard = lock_global();
    let rx = install_spy_client("old");

    let handle = svcmetrics_macros::global_client();
    svcmetrics_macros::reset_to_noop();

    assert_eq!("old.", handle.prefix());
    drop(handle);
    assert!(read_all_metrics(&rx).is_empty());
}

#[test]
fn test_timeit_records_to_client_current_at_start() {
    let _guard = lock_global();
    let rx = install_spy_client("old");
    let (new_rx, sink) = SpyMetricSink::new();

    svcmetrics_macros::timeit("swap", || {
        svcmetrics_macros::set_global_client(StatsdClient::from_sink("new", sink));
    });

    let metrics = read_all_metrics(&rx);
    assert_eq!(1, metrics.len());
    assert!(metrics[0].starts_with("old.swap:"));
    assert!(read_all_metrics(&new_rx).is_empty());
}

#[test]
fn test_errors_go_to_global_handler() {
    let _guard = lock_global();
    let errors = Arc::new(AtomicUsize::new(0));
    let errors_ref = errors.clone();

    let client = StatsdClient::builder("app", svcmetrics::NopMetricSink)
        .with_error_handler(move |_e| {
            errors_ref.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();
    svcmetrics_macros::set_global_client(client);

    svcmetrics_macros::increment("");
    svcmetrics_macros::gauge("a:b", 1);
    svcmetrics_macros::increment("fine");

    assert_eq!(2, errors.load(Ordering::SeqCst));
}

#[test]
fn test_configure_sends_udp() {
    let _guard = lock_global();
    let listener = UdpListener::bind().unwrap();

    svcmetrics_macros::configure("127.0.0.1", listener.port().unwrap(), "app").unwrap();
    assert!(svcmetrics_macros::is_configured());

    svcmetrics_macros::gauge("mem", 512);
    assert_eq!("app.mem:512|g", listener.recv().unwrap());

    svcmetrics_macros::reset_to_noop();
}

#[test]
fn test_configure_with_config() {
    let _guard = lock_global();
    let listener = UdpListener::bind().unwrap();

    let config = ClientConfig {
        host: "127.0.0.1".to_owned(),
        port: listener.port().unwrap(),
        prefix: "cfg".to_owned(),
    };
    svcmetrics_macros::configure_with(&config).unwrap();

    svcmetrics_macros::count("hits", 2);
    assert_eq!("cfg.hits:2|c", listener.recv().unwrap());

    svcmetrics_macros::reset_to_noop();
}

#[test]
fn test_configure_failure_keeps_current_client() {
    let _guard = lock_global();
    let rx = install_spy_client("kept");

    let res = svcmetrics_macros::configure("127.0.0.1", 8125, "bad|prefix");
    assert!(res.is_err());

    svcmetrics_macros::increment("still.here");
    assert_eq!(vec!["kept.still.here:1|c"], read_all_metrics(&rx));
}

#[test]
fn test_concurrent_use_during_swap() {
    let _guard = lock_global();
    let rx = install_spy_client("swap");

    let threads: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..100 {
                    svcmetrics_macros::increment("hits");
                }
            })
        })
        .collect();

    for _ in 0..10 {
        svcmetrics_macros::reset_to_noop();
        let (_other_rx, sink) = SpyMetricSink::new();
        svcmetrics_macros::set_global_client(StatsdClient::from_sink("swap", sink));
    }

    for t in threads {
        t.join().unwrap();
    }

    for metric in read_all_metrics(&rx) {
        assert_eq!("swap.hits:1|c", metric);
    }
}
