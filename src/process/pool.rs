//! The worker pool: fork, claim-compute loop, join.

use std::io;

use tracing::warn;

use super::queue::WorkQueue;
use crate::error::Error;

/// Fork `workers` processes that drain `queue`, then wait for all of them.
///
/// Each child runs the identical loop - claim a unit, run `compute` on it,
/// repeat - and exits with `libc::_exit(0)` once the queue is drained, so no
/// Rust destructors run in the children and the shared mappings stay alive
/// for the parent. `compute` must write only to the output region owned by
/// the unit it was handed; given that, no synchronisation beyond the queue's
/// own semaphore is needed.
///
/// A failed `fork` is a soft failure: it's logged and the pool continues
/// with the workers that did start, since queue exhaustion is the only
/// termination signal and any one worker can drain the remainder. If *no*
/// worker starts, nothing would ever drain the queue, so that case is
/// reported as [`Error::NoWorkers`] rather than returning untouched output.
///
/// Returns the number of workers actually spawned.
pub fn run<F>(queue: &WorkQueue, workers: usize, compute: F) -> Result<usize, Error>
where
    F: Fn(usize),
{
    let mut children: Vec<libc::pid_t> = Vec::with_capacity(workers);
    for worker in 0..workers {
        let pid = unsafe { libc::fork() };
        if pid < 0 {
            warn!(
                worker,
                error = %io::Error::last_os_error(),
                "failed to fork worker, continuing with fewer"
            );
            continue;
        }
        if pid == 0 {
            while let Some(unit) = queue.claim() {
                compute(unit);
            }
            unsafe { libc::_exit(0) };
        }
        children.push(pid);
    }

    if children.is_empty() {
        return Err(Error::NoWorkers);
    }

    // Reap each worker by pid. A plain `wait` would accept *any* child of
    // this process, so an unrelated child (another pool running on a second
    // thread, or one forked by the caller) could use up a join slot and let
    // us return while our own workers are still writing.
    for pid in &children {
        let mut status: libc::c_int = 0;
        while unsafe { libc::waitpid(*pid, &mut status, 0) } == -1 {
            // "No such child" means it was already collected, which is
            // normal completion here, not an error.
            if io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
                break;
            }
        }
    }

    Ok(children.len())
}
