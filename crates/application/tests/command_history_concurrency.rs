use application::CommandHistory;
use domain::{CommandRef, SetPositionCommand};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test] // concurrent_adds_are_all_recorded
fn concurrent_adds_are_all_recorded() {
    let history = Arc::new(CommandHistory::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let command: CommandRef = Arc::new(SetPositionCommand::new(t as i32, i as i32));
                    history.add_command(Some(command));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(history.len(), THREADS * PER_THREAD);
}

#[test] // concurrent_none_markers_never_repeat
fn concurrent_none_markers_never_repeat() {
    let history = Arc::new(CommandHistory::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    if (i + t) % 3 == 0 {
                        let command: CommandRef = Arc::new(SetPositionCommand::new(0, 0));
                        history.add_command(Some(command));
                    } else {
                        history.add_command(None);
                    }
                }
            })
        })
        .collect();

    // Readers take snapshots while writers are running
    for _ in 0..50 {
        let snapshot = history.history();
        assert!(
            snapshot
                .windows(2)
                .all(|pair| !(pair[0].is_none() && pair[1].is_none()))
        );
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let entries = history.history();
    assert!(
        entries
            .windows(2)
            .all(|pair| !(pair[0].is_none() && pair[1].is_none()))
    );
    let non_none = entries.iter().filter(|e| e.is_some()).count();
    let expected: usize = (0..THREADS)
        .map(|t| (0..PER_THREAD).filter(|i| (i + t) % 3 == 0).count())
        .sum();
    assert_eq!(non_none, expected);
}
