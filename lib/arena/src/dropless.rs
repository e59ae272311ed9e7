use core::alloc::Layout;
use core::cell::{Cell, RefCell};
use core::marker::PhantomData;
use core::{cmp, mem, ptr, slice, str};

use crate::chunk::Chunk;
use crate::{HUGE_PAGE, PAGE_SIZE};

/// Bump allocator for types without destructors.
///
/// Every allocation borrows the lifetime `'ctx`, so the references handed
/// out live exactly as long as the arena. Allocation is append-only: there
/// is no per-object free, and the whole arena is reclaimed in one bulk
/// operation when it is dropped.
///
/// Since the arena never runs destructors, [`alloc`](Self::alloc) and
/// [`alloc_iter`](Self::alloc_iter) reject any `T` that needs [`Drop`].
pub struct DroplessArena<'ctx> {
    chunks: RefCell<Vec<Chunk>>,
    /// First free byte of the current chunk.
    cursor: Cell<*mut u8>,
    /// One past the last usable byte of the current chunk.
    limit: Cell<*mut u8>,
    _marker: PhantomData<&'ctx u8>,
}

#[inline]
const fn align_up(addr: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (addr + align - 1) & !(align - 1)
}

impl<'ctx> DroplessArena<'ctx> {
    fn try_alloc_raw(&self, layout: Layout) -> Option<*mut u8> {
        let cursor = self.cursor.get();
        let aligned = align_up(cursor.addr(), layout.align());
        let end = aligned.checked_add(layout.size())?;

        if end <= self.limit.get().addr() {
            self.cursor.set(cursor.with_addr(end));
            Some(cursor.with_addr(aligned))
        } else {
            None
        }
    }

    /// Allocates a chunk of bytes for the given [`Layout`]
    pub fn alloc_raw(&self, layout: Layout) -> *mut u8 {
        if layout.size() == 0 {
            return ptr::without_provenance_mut(layout.align());
        }
        loop {
            if let Some(ptr) = self.try_alloc_raw(layout) {
                debug_assert!(!ptr.is_null());
                return ptr;
            }
            self.grow(layout);
        }
    }

    /// Allocates a single value, and returns a reference to it
    #[allow(clippy::mut_from_ref)]
    pub fn alloc<T>(&self, value: T) -> &'ctx mut T {
        assert!(!mem::needs_drop::<T>());

        let ptr = self.alloc_raw(Layout::new::<T>()).cast::<T>();

        unsafe {
            ptr.write(value);
            &mut *ptr
        }
    }

    /// Allocates a slice of values from the given [`ExactSizeIterator`]
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_iter<T, I>(&self, iter: I) -> &'ctx mut [T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        assert!(!mem::needs_drop::<T>());
        assert!(mem::size_of::<T>() != 0);

        let mut iter = iter.into_iter();
        let len = iter.len();

        if len == 0 {
            return &mut [];
        }

        let ptr = self.alloc_raw(Layout::array::<T>(len).unwrap()).cast::<T>();
        for i in 0..len {
            let Some(value) = iter.next() else {
                /* `len` comes from an ExactSizeIterator,
                 * so `next` returns Some for each of the `len` slots */
                unreachable!()
            };
            unsafe { ptr.add(i).write(value) };
        }
        unsafe { slice::from_raw_parts_mut(ptr, len) }
    }

    /// Copies `s` into the arena
    pub fn alloc_str(&self, s: &str) -> &'ctx str {
        if s.is_empty() {
            return "";
        }
        let bytes = self.alloc_iter(s.bytes());
        /* The bytes were copied verbatim from a str */
        unsafe { str::from_utf8_unchecked(bytes) }
    }

    fn grow(&self, layout: Layout) {
        /* Worst case, the aligned start lands `align - 1`
         * bytes past the chunk base */
        let needed = layout.size() + layout.align() - 1;

        let mut chunks = self.chunks.borrow_mut();

        let mut capacity = chunks
            .last()
            .map_or(PAGE_SIZE / 2, |c| c.capacity().min(HUGE_PAGE / 2));
        capacity *= 2;
        capacity = cmp::max(capacity, needed);

        let chunk = Chunk::new(align_up(capacity, PAGE_SIZE));
        self.cursor.set(chunk.base());
        self.limit.set(chunk.limit());
        chunks.push(chunk);
    }
}

impl Default for DroplessArena<'_> {
    fn default() -> Self {
        Self {
            chunks: RefCell::default(),
            cursor: Cell::new(ptr::null_mut()),
            limit: Cell::new(ptr::null_mut()),
            _marker: PhantomData,
        }
    }
}
