//! Anonymous shared-memory buffers for the worker pool.
//!
//! Buffers are `mmap`ed `MAP_SHARED | MAP_ANONYMOUS` *before* the workers
//! fork, so every child inherits a mapping of the same physical pages.
//! Writes a worker makes to C are visible to the parent once the worker has
//! been reaped; A and B are copied in pre-fork and never written afterward.

use std::io;

use crate::error::Error;

/// A fixed-length `f64` buffer in anonymous shared memory.
///
/// Unmapped on drop. Children exit via `libc::_exit`, so drop only ever
/// runs in the orchestrating parent, after all workers have been joined.
pub struct SharedBuf {
    ptr: *mut f64,
    len: usize,
}

impl SharedBuf {
    /// Map a zero-initialised shared buffer of `len` doubles.
    pub fn zeroed(len: usize) -> Result<Self, Error> {
        assert!(len > 0, "shared buffer must be non-empty");
        let bytes = len * std::mem::size_of::<f64>();
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
        // Anonymous mappings start zero-filled, which doubles as C's
        // initial all-zero state.
        Ok(Self {
            ptr: ptr as *mut f64,
            len,
        })
    }

    /// Map a shared buffer and copy `data` into it.
    pub fn from_slice(data: &[f64]) -> Result<Self, Error> {
        let mut buf = Self::zeroed(data.len())?;
        buf.as_mut_slice().copy_from_slice(data);
        Ok(buf)
    }

    /// Raw base pointer, for use inside forked workers.
    pub fn ptr(&self) -> *mut f64 {
        self.ptr
    }

    pub fn as_slice(&self) -> &[f64] {
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    /// Copy the buffer's contents out into an owned vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}

impl Drop for SharedBuf {
    fn drop(&mut self) {
        let bytes = self.len * std::mem::size_of::<f64>();
        unsafe {
            libc::munmap(self.ptr as *mut libc::c_void, bytes);
        }
    }
}

/// The three matrices of one multiplication, all in shared memory.
///
/// A and B hold the operands (read-only once the workers fork), C starts
/// zeroed and receives the disjoint per-unit results.
pub struct Arena {
    pub a: SharedBuf,
    pub b: SharedBuf,
    pub c: SharedBuf,
}

impl Arena {
    /// Map the three buffers and copy the operands in.
    pub fn new(a: &[f64], b: &[f64], n: usize) -> Result<Self, Error> {
        assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
        assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
        Ok(Self {
            a: SharedBuf::from_slice(a)?,
            b: SharedBuf::from_slice(b)?,
            c: SharedBuf::zeroed(n * n)?,
        })
    }
}
