//! Ownership Tests
//!
//! Reference counts across parents, clones and threads.

use crate::*;
use std::sync::{mpsc, Arc, Barrier};
use std::thread;

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_appended_child_outlives_released_parent() {
    let child = Representation::new();
    child.set_uri("/a/child").unwrap();

    let parent = Representation::new();
    parent.append_child(&child).unwrap();
    assert_eq!(child.ref_count(), 2);

    assert!(parent.release());
    assert_eq!(child.ref_count(), 1);
    assert_eq!(child.uri().as_deref(), Some("/a/child"));
}

#[test]
fn test_retain_and_release_balance() {
    let repr = Representation::new();
    let extra = repr.retain();
    assert_eq!(repr.ref_count(), 2);
    assert!(!extra.release());
    assert_eq!(repr.ref_count(), 1);
    assert!(repr.release());
}

#[test]
fn test_deep_clone_shares_nothing() {
    let parent = Representation::new();
    let child = Representation::new();
    child.set_int("n", 1).unwrap();
    parent.append_child(&child).unwrap();

    let copy = parent.deep_clone();
    copy.child(0).unwrap().set_int("n", 2).unwrap();

    assert_eq!(child.get_int("n").unwrap(), 1);
    assert_eq!(child.ref_count(), 2);
    assert!(!copy.child(0).unwrap().ptr_eq(&child));
}

#[test]
fn test_cycles_rejected_through_attributes_and_lists() {
    let outer = Representation::new();
    let inner = Representation::new();
    outer.set_representation("inner", &inner).unwrap();

    let err = inner.append_child(&outer).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));

    let err = inner
        .set_list("loop", List::from(vec![outer.clone()]))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

// ============================================================================
// Async handoff
// ============================================================================

#[test]
fn test_retained_tree_survives_until_completion() {
    let repr = Representation::new();
    repr.set_bool("power", true).unwrap();

    let (tx, rx) = mpsc::channel::<Representation>();
    let handle = repr.retain();
    let worker = thread::spawn(move || {
        let got = rx.recv().unwrap();
        got.get_bool("power").unwrap()
    });

    drop(repr);
    tx.send(handle).unwrap();
    assert!(worker.join().unwrap());
}

#[test]
fn test_concurrent_writers_each_land() {
    let repr = Representation::new();
    let workers: Vec<_> = (0..8)
        .map(|i| {
            let shared = repr.retain();
            thread::spawn(move || shared.set_int(format!("k{}", i), i).unwrap())
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    assert_eq!(repr.key_count(), 8);
    assert_eq!(repr.ref_count(), 1);
}

#[test]
fn test_crossing_appends_never_form_a_cycle() {
    for _ in 0..200 {
        let a = Representation::new();
        let b = Representation::new();
        let barrier = Arc::new(Barrier::new(2));

        let spawn_append = |parent: Representation, child: Representation| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                parent.append_child(&child).is_ok()
            })
        };
        let first = spawn_append(a.retain(), b.retain());
        let second = spawn_append(b.retain(), a.retain());
        let linked = [first.join().unwrap(), second.join().unwrap()];

        assert_eq!(linked.iter().filter(|ok| **ok).count(), 1);
        let _ = a.deep_clone();
    }
}
