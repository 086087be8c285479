//! Deadline supervision for work that cannot be interrupted
//!
//! The job runs on its own thread while the caller waits on a channel with a
//! timeout. When the deadline passes the caller returns at once and drops the
//! receiving end, so whatever the job produces later is discarded by the
//! failed send and never reaches anyone. The job is told it was abandoned
//! through a flag it may poll; stopping the thread itself is best-effort.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

/// The supervised job did not report back in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("deadline of {deadline:?} exceeded after {waited:?}")]
pub struct DeadlineExceeded {
    pub deadline: Duration,
    pub waited: Duration,
}

/// Run `job` on a dedicated thread and wait for it at most `deadline`
///
/// `job` receives the abandonment flag, which is raised once the caller has
/// stopped waiting.
///
/// # Errors
///
/// Returns `DeadlineExceeded` if the job has not delivered its result when the
/// deadline passes.
///
/// # Panics
///
/// A panic inside `job` is resumed on the calling thread.
pub fn run_with_deadline<T, F>(deadline: Duration, job: F) -> Result<T, DeadlineExceeded>
where
    T: Send + 'static,
    F: FnOnce(&AtomicBool) -> T + Send + 'static,
{
    let start_time = Instant::now();
    let abandoned = Arc::new(AtomicBool::new(false));
    let worker_flag = Arc::clone(&abandoned);

    let (tx, rx) = mpsc::sync_channel(1);

    let handle = thread::spawn(move || {
        log::debug!("supervised job started");
        let result = job(&worker_flag);
        log::debug!("supervised job finished");
        let _ = tx.send(result); // receiver is gone once the caller gave up
    });

    match rx.recv_timeout(deadline) {
        Ok(result) => {
            log::debug!("supervised job reported after {:?}", start_time.elapsed());
            Ok(result)
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            let waited = start_time.elapsed();
            log::warn!("supervised job overran its {deadline:?} deadline, abandoning it");

            abandoned.store(true, Ordering::Release);
            drop(rx);
            // Detach: the thread keeps running until it notices the flag or finishes.
            drop(handle);

            Err(DeadlineExceeded { deadline, waited })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => match handle.join() {
            Err(payload) => panic::resume_unwind(payload),
            Ok(()) => unreachable!("supervised job exited without reporting a result"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_job_returns_value() {
        let value = run_with_deadline(Duration::from_secs(5), |_| 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_slow_job_times_out_promptly() {
        let deadline = Duration::from_millis(100);
        let started = Instant::now();
        let result = run_with_deadline(deadline, |_| {
            thread::sleep(Duration::from_secs(5));
            "late"
        });
        let waited = started.elapsed();

        let exceeded = result.unwrap_err();
        assert_eq!(exceeded.deadline, deadline);
        assert!(waited >= deadline);
        assert!(waited < Duration::from_secs(2), "waited {waited:?}");
    }

    #[test]
    fn test_abandon_flag_is_raised() {
        let (seen_tx, seen_rx) = mpsc::channel();
        let result = run_with_deadline(Duration::from_millis(50), move |abandoned| {
            while !abandoned.load(Ordering::Acquire) {
                thread::sleep(Duration::from_millis(5));
            }
            let _ = seen_tx.send(());
        });
        assert!(result.is_err());
        assert!(seen_rx.recv_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_job_panic_is_resumed() {
        let _ = run_with_deadline(Duration::from_secs(5), |_| -> u8 { panic!("boom") });
    }
}
