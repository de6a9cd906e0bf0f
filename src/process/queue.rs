//! The work coordinator: a shared counter handing out unit indices.
//!
//! One `usize` counter and one process-shared POSIX semaphore live together
//! in a tiny `MAP_SHARED` block. Whichever worker asks next gets the current
//! counter value and bumps it; the semaphore serialises the read-modify-write
//! so claims across all workers form a strictly increasing, gap-free,
//! duplicate-free sequence. That sequence property is the entire correctness
//! argument for the pool: each unit index maps to a disjoint region of C.

use std::io;

use crate::error::Error;

#[repr(C)]
struct QueueState {
    next: usize,
    mutex: libc::sem_t,
}

/// Shared work-unit dispenser. Create before forking workers; drop (in the
/// parent) only after every worker has been reaped.
pub struct WorkQueue {
    state: *mut QueueState,
    total: usize,
}

// Safe to share between execution contexts: every access to the counter goes
// through the semaphore, and the raw pointer targets a MAP_SHARED block that
// outlives all users by construction.
unsafe impl Send for WorkQueue {}
unsafe impl Sync for WorkQueue {}

impl WorkQueue {
    /// Map the coordinator block and initialise the counter to 0 and the
    /// semaphore to 1 (unlocked), shared across processes.
    pub fn new(total: usize) -> Result<Self, Error> {
        let bytes = std::mem::size_of::<QueueState>();
        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                bytes,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if ptr == libc::MAP_FAILED {
            return Err(Error::Map(io::Error::last_os_error()));
        }
        let state = ptr as *mut QueueState;
        unsafe {
            (*state).next = 0;
            // pshared = 1: the semaphore must work across fork boundaries.
            if libc::sem_init(&raw mut (*state).mutex, 1, 1) == -1 {
                let err = io::Error::last_os_error();
                libc::munmap(ptr, bytes);
                return Err(Error::Semaphore(err));
            }
        }
        Ok(Self { state, total })
    }

    /// Atomically claim the next work unit.
    ///
    /// Returns `Some(idx)` with the pre-increment counter value, or `None`
    /// once all `total` units have been handed out. Exhaustion leaves the
    /// counter untouched, so every subsequent claim also returns `None`.
    /// Safe to call from any number of workers concurrently; calls are
    /// serialised by the semaphore and never block longer than one
    /// read-increment-release by each contending caller.
    pub fn claim(&self) -> Option<usize> {
        unsafe {
            let mutex = &raw mut (*self.state).mutex;
            loop {
                if libc::sem_wait(mutex) == 0 {
                    break;
                }
                // Retry interrupted waits; any other failure means the
                // semaphore is unusable, so report the queue as drained.
                if io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
                    return None;
                }
            }
            let idx = (*self.state).next;
            let claimed = if idx < self.total {
                (*self.state).next = idx + 1;
                Some(idx)
            } else {
                None
            };
            libc::sem_post(mutex);
            claimed
        }
    }

    /// Total number of units this queue dispenses.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Drop for WorkQueue {
    fn drop(&mut self) {
        unsafe {
            libc::sem_destroy(&raw mut (*self.state).mutex);
            libc::munmap(
                self.state as *mut libc::c_void,
                std::mem::size_of::<QueueState>(),
            );
        }
    }
}
