use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use stagegrep::pipeline::stage_channel;

// --- FIFO ordering ---

#[test]
fn test_fifo_order_single_thread() {
    // Room for the items plus the end-of-stream marker, so nothing blocks.
    let (tx, rx) = stage_channel(16);
    for i in 0..8 {
        assert!(tx.send(i));
    }
    tx.finish();
    let got: Vec<i32> = std::iter::from_fn(|| rx.recv()).collect();
    assert_eq!(got, (0..8).collect::<Vec<_>>());
}

#[test]
fn test_fifo_order_across_threads_with_backpressure() {
    // Capacity far below N, so the producer keeps parking on a full channel
    // while the consumer drains. Order and count must survive regardless.
    let (tx, rx) = stage_channel(4);
    let producer = thread::spawn(move || {
        for i in 0..1000 {
            assert!(tx.send(i));
        }
        tx.finish();
    });
    let mut got = Vec::new();
    while let Some(v) = rx.recv() {
        got.push(v);
    }
    producer.join().unwrap();
    assert_eq!(got, (0..1000).collect::<Vec<i32>>());
}

// --- capacity / blocking ---

#[test]
fn test_send_blocks_at_capacity() {
    let (tx, rx) = stage_channel(2);
    assert!(tx.send(1));
    assert!(tx.send(2));
    assert!(tx.is_full());
    assert_eq!(tx.len(), 2);

    let sent_third = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&sent_third);
    let producer = thread::spawn(move || {
        // Parks here until the consumer makes room.
        assert!(tx.send(3));
        flag.store(true, Ordering::SeqCst);
        tx.finish();
    });

    thread::sleep(Duration::from_millis(100));
    assert!(
        !sent_third.load(Ordering::SeqCst),
        "send returned while the channel held its full capacity"
    );

    assert_eq!(rx.recv(), Some(1));
    assert_eq!(rx.recv(), Some(2));
    assert_eq!(rx.recv(), Some(3));
    assert_eq!(rx.recv(), None);
    producer.join().unwrap();
    assert!(sent_third.load(Ordering::SeqCst));
}

#[test]
fn test_capacity_one_still_delivers_everything() {
    let (tx, rx) = stage_channel(1);
    let producer = thread::spawn(move || {
        for i in 0..100 {
            assert!(tx.send(i));
        }
        tx.finish();
    });
    let got: Vec<i32> = std::iter::from_fn(|| rx.recv()).collect();
    producer.join().unwrap();
    assert_eq!(got.len(), 100);
    assert_eq!(got, (0..100).collect::<Vec<_>>());
}

// --- end-of-stream protocol ---

#[test]
fn test_finish_without_items() {
    let (tx, rx) = stage_channel::<i32>(1);
    tx.finish();
    assert_eq!(rx.recv(), None);
    // Stays terminated; a second recv must not block or produce data.
    assert_eq!(rx.recv(), None);
}

#[test]
fn test_all_items_precede_the_marker() {
    let (tx, rx) = stage_channel(8);
    for i in 0..3 {
        assert!(tx.send(i));
    }
    tx.finish();
    assert_eq!(rx.recv(), Some(0));
    assert_eq!(rx.recv(), Some(1));
    assert_eq!(rx.recv(), Some(2));
    assert_eq!(rx.recv(), None);
    assert_eq!(rx.recv(), None);
}

// --- disconnect behavior ---

#[test]
fn test_recv_drains_then_ends_after_dropped_sender() {
    let (tx, rx) = stage_channel::<i32>(4);
    assert!(tx.send(7));
    // A producer dying without the marker must not wedge its consumer.
    drop(tx);
    assert_eq!(rx.recv(), Some(7));
    assert_eq!(rx.recv(), None);
}

#[test]
fn test_send_false_after_dropped_receiver() {
    let (tx, rx) = stage_channel::<i32>(4);
    drop(rx);
    assert!(!tx.send(7));
}
