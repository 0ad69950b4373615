use std::thread;

use quadrat_pipeline::Stage;

#[test]
fn is_done_transitions_forward_only() {
    let stage = Stage::new(8, 1);
    assert!(!stage.is_done());

    stage.enqueue(1u32);
    stage.enqueue(2u32);
    stage.done();

    // Draining: producers finished but items remain.
    assert!(!stage.is_done());
    assert!(!stage.is_empty());

    assert_eq!(stage.try_dequeue(), Some(1));
    assert_eq!(stage.try_dequeue(), Some(2));

    // Finished is terminal.
    for _ in 0..100 {
        assert!(stage.is_done());
    }
}

#[test]
fn done_requires_all_producers() {
    let stage = Stage::<u32>::new(8, 3);

    stage.done();
    stage.done();
    assert!(!stage.is_done());

    stage.done();
    assert!(stage.is_done());
}

#[test]
#[should_panic(expected = "more times than there are producers")]
fn done_over_calling_is_fatal() {
    let stage = Stage::<u32>::new(8, 1);
    stage.done();
    stage.done();
}

#[test]
fn consumers_observe_completion_across_threads() {
    const ITEMS: u32 = 1_000;

    let stage = Stage::new(16, 1);

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..ITEMS {
                stage.enqueue(i);
            }
            stage.done();
        });

        let consumer = s.spawn(|| {
            let mut seen = 0;
            loop {
                while stage.try_dequeue().is_some() {
                    seen += 1;
                }
                if stage.is_done() {
                    break;
                }
                thread::yield_now();
            }
            seen
        });

        assert_eq!(consumer.join().unwrap(), ITEMS);
    });

    assert!(stage.is_empty());
}
