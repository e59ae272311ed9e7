use core::mem::MaybeUninit;
use core::ptr::NonNull;

/// A fixed-capacity block of raw storage.
///
/// The arena bumps a cursor through the block; the chunk itself never
/// tracks which bytes are live. Dropping a chunk releases the storage
/// without running any destructors.
pub(crate) struct Chunk {
    storage: NonNull<[MaybeUninit<u8>]>,
}

impl Chunk {
    pub fn new(capacity: usize) -> Self {
        let storage = Box::into_raw(Box::new_uninit_slice(capacity));
        /* Box::into_raw never returns null */
        let storage = unsafe { NonNull::new_unchecked(storage) };
        Self { storage }
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// First byte of the block.
    #[inline]
    pub fn base(&self) -> *mut u8 {
        self.storage.as_ptr().cast::<u8>()
    }

    /// One past the last byte of the block.
    #[inline]
    pub fn limit(&self) -> *mut u8 {
        unsafe { self.base().add(self.capacity()) }
    }
}

impl Drop for Chunk {
    fn drop(&mut self) {
        drop(unsafe { Box::from_raw(self.storage.as_ptr()) });
    }
}
