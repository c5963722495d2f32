//! DynVec: resizable index-addressed vector using realloc for growth
//!
//! Unlike std::Vec, every fallible operation returns an explicit `Result`
//! instead of aborting on allocation failure, and removal/overwrite
//! operations accept an optional caller-supplied disposer so element payloads
//! can be reclaimed without requiring a universal `Drop` bound at the API
//! surface. Growth uses realloc, which can often avoid copying when the
//! allocator can expand in place.

use crate::error::{check_bounds, ParvecError, Result};
use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Signal returned by a [`DynVec::for_each`] visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep iterating.
    Continue,
    /// Halt iteration early. Not an error; `for_each` still returns `Ok`.
    Stop,
}

/// Resizable, index-addressed vector with explicit error reporting
///
/// `DynVec` tracks a logical size against an allocated capacity and grows by
/// doubling, so appends are amortized O(1). Indexed access is O(1). Two
/// removal flavors are provided: [`remove`](DynVec::remove) preserves element
/// order at O(n) cost, [`swap_remove`](DynVec::swap_remove) is O(1) but moves
/// the last element into the vacated slot.
///
/// The container provides no internal locking; share it across threads only
/// with external synchronization. The parallel sort in
/// [`crate::algorithms`] borrows the buffer mutably for the duration of the
/// call and hands out disjoint sub-ranges to its workers.
///
/// # Examples
///
/// ```rust
/// use parvec::DynVec;
///
/// let mut vec = DynVec::new();
/// vec.push(42).unwrap();
/// vec.push(84).unwrap();
/// assert_eq!(vec.len(), 2);
/// assert_eq!(*vec.get(0).unwrap(), 42);
/// ```
pub struct DynVec<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    cap: usize,
}

impl<T> DynVec<T> {
    /// Create a new empty DynVec with no backing allocation
    #[inline]
    pub fn new() -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
        }
    }

    /// Maximum representable slot count for the element type
    ///
    /// Bounded so that the total byte size of the buffer stays within the
    /// platform's addressable range. Zero-sized types are unbounded.
    #[inline]
    pub fn max_capacity() -> usize {
        if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / mem::size_of::<T>()
        }
    }

    /// Create a DynVec with the specified capacity
    ///
    /// A capacity of 0 is valid and allocates nothing. Fails with
    /// `InvalidCapacity` if `cap` exceeds [`max_capacity`](Self::max_capacity)
    /// (no allocation is attempted) and with `AllocationFailure` if the
    /// backing store cannot be obtained.
    pub fn with_capacity(cap: usize) -> Result<Self> {
        if cap > Self::max_capacity() {
            return Err(ParvecError::invalid_capacity(cap, Self::max_capacity()));
        }

        if cap == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: None,
                len: 0,
                cap,
            });
        }

        let layout = Layout::array::<T>(cap)
            .map_err(|_| ParvecError::invalid_capacity(cap, Self::max_capacity()))?;

        let ptr = unsafe { alloc::alloc_zeroed(layout) as *mut T };
        if ptr.is_null() {
            return Err(ParvecError::allocation_failure(layout.size()));
        }

        Ok(Self {
            ptr: Some(unsafe { NonNull::new_unchecked(ptr) }),
            len: 0,
            cap,
        })
    }

    /// Get the number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the vector is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the allocated capacity in slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Get a pointer to the underlying data
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.elems_ptr()
    }

    /// Get a mutable pointer to the underlying data
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.elems_ptr()
    }

    // Base pointer for element access. Dangling (valid for zero-size reads)
    // when nothing is allocated.
    #[inline]
    fn elems_ptr(&self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Get the vector as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.elems_ptr(), self.len) }
        }
    }

    /// Get the vector as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.len == 0 {
            &mut []
        } else {
            unsafe { slice::from_raw_parts_mut(self.elems_ptr(), self.len) }
        }
    }

    /// Get a reference to the element at `index`
    ///
    /// Fails with `OutOfBounds` when `index >= len`, including `index == len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        Ok(unsafe { &*self.elems_ptr().add(index) })
    }

    /// Get a mutable reference to the element at `index`
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len)?;
        Ok(unsafe { &mut *self.elems_ptr().add(index) })
    }

    /// Overwrite the slot at `index`, returning the displaced element
    ///
    /// The caller decides the old element's fate; see
    /// [`set_with`](Self::set_with) for the disposer-driven form.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        check_bounds(index, self.len)?;
        Ok(mem::replace(
            unsafe { &mut *self.elems_ptr().add(index) },
            value,
        ))
    }

    /// Overwrite the slot at `index`, feeding the old element to `dispose`
    ///
    /// The new value is written first; the displaced old element is then
    /// handed to the disposer exactly once. The disposer cannot observe the
    /// container itself, which stays borrowed for the duration of the call.
    pub fn set_with<F>(&mut self, index: usize, value: T, dispose: F) -> Result<()>
    where
        F: FnOnce(T),
    {
        let old = self.set(index, value)?;
        dispose(old);
        Ok(())
    }

    /// Append an element at the end, growing the buffer if necessary
    ///
    /// Growth doubles the capacity (`max(1, cap * 2)`), keeping appends
    /// amortized O(1). On growth failure the vector is left untouched: length
    /// unchanged, old buffer and every element intact.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.cap {
            let max = Self::max_capacity();
            if self.cap >= max {
                return Err(ParvecError::invalid_capacity(
                    self.cap.saturating_mul(2),
                    max,
                ));
            }
            let new_cap = if self.cap == 0 {
                1
            } else {
                self.cap.saturating_mul(2).min(max)
            };
            self.grow_to(new_cap)?;
        }

        unsafe {
            ptr::write(self.elems_ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Pop an element from the end of the vector
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(unsafe { ptr::read(self.elems_ptr().add(self.len)) })
        }
    }

    /// Reserve space for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let max = Self::max_capacity();
        let required = self
            .len
            .checked_add(additional)
            .ok_or_else(|| ParvecError::invalid_capacity(usize::MAX, max))?;
        if required > max {
            return Err(ParvecError::invalid_capacity(required, max));
        }

        if required <= self.cap {
            return Ok(());
        }

        // Doubling floor keeps interleaved push/reserve amortized.
        let new_cap = required.max(self.cap.saturating_mul(2)).min(max);
        self.grow_to(new_cap)
    }

    // Reallocate to exactly `new_cap` slots. On failure the old block is
    // still valid and untouched, so the vector keeps its prior state.
    fn grow_to(&mut self, new_cap: usize) -> Result<()> {
        debug_assert!(new_cap > self.cap);
        debug_assert!(new_cap <= Self::max_capacity());

        if mem::size_of::<T>() == 0 {
            self.cap = new_cap;
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap)
            .map_err(|_| ParvecError::invalid_capacity(new_cap, Self::max_capacity()))?;

        let new_ptr = match self.ptr {
            Some(ptr) if self.cap > 0 => {
                let old_layout = Layout::array::<T>(self.cap).unwrap();
                unsafe {
                    alloc::realloc(ptr.as_ptr() as *mut u8, old_layout, new_layout.size())
                        as *mut T
                }
            }
            _ => unsafe { alloc::alloc(new_layout) as *mut T },
        };

        if new_ptr.is_null() {
            return Err(ParvecError::allocation_failure(new_layout.size()));
        }

        self.ptr = Some(unsafe { NonNull::new_unchecked(new_ptr) });
        self.cap = new_cap;
        Ok(())
    }

    /// Remove and return the element at `index`, preserving order
    ///
    /// All subsequent elements shift left by one position: O(len − index).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;

        unsafe {
            let ptr = self.elems_ptr().add(index);
            let value = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Remove the element at `index`, preserving order, disposing of it
    pub fn remove_with<F>(&mut self, index: usize, dispose: F) -> Result<()>
    where
        F: FnOnce(T),
    {
        let value = self.remove(index)?;
        dispose(value);
        Ok(())
    }

    /// Remove and return the element at `index` in O(1)
    ///
    /// NOT order-preserving: unless `index` was the last live slot, the
    /// former last element moves into the vacated position.
    pub fn swap_remove(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;

        unsafe {
            let base = self.elems_ptr();
            let value = ptr::read(base.add(index));
            self.len -= 1;
            if index != self.len {
                ptr::copy_nonoverlapping(base.add(self.len), base.add(index), 1);
            }
            Ok(value)
        }
    }

    /// Remove the element at `index` in O(1), disposing of it
    ///
    /// NOT order-preserving; see [`swap_remove`](Self::swap_remove).
    pub fn swap_remove_with<F>(&mut self, index: usize, dispose: F) -> Result<()>
    where
        F: FnOnce(T),
    {
        let value = self.swap_remove(index)?;
        dispose(value);
        Ok(())
    }

    /// Drop every live element in index order; capacity is retained
    pub fn clear(&mut self) {
        for i in 0..self.len {
            unsafe {
                ptr::drop_in_place(self.elems_ptr().add(i));
            }
        }
        self.len = 0;
    }

    /// Hand every live element to `dispose` in index order; capacity retained
    ///
    /// Each element is passed by value exactly once. If the disposer panics,
    /// elements not yet visited leak rather than double-drop.
    pub fn clear_with<F>(&mut self, mut dispose: F)
    where
        F: FnMut(T),
    {
        let len = self.len;
        self.len = 0;
        for i in 0..len {
            unsafe {
                dispose(ptr::read(self.elems_ptr().add(i)));
            }
        }
    }

    /// Dispose of every live element in index order, then release the buffer
    ///
    /// Afterwards the vector is empty with zero capacity, equivalent to a
    /// freshly created one; calling this again is a no-op.
    pub fn destroy_with<F>(&mut self, dispose: F)
    where
        F: FnMut(T),
    {
        self.clear_with(dispose);
        self.release_buffer();
    }

    fn release_buffer(&mut self) {
        if let Some(ptr) = self.ptr {
            if self.cap > 0 && mem::size_of::<T>() != 0 {
                unsafe {
                    let layout = Layout::array::<T>(self.cap).unwrap();
                    alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
                }
            }
        }
        self.ptr = None;
        self.cap = 0;
    }

    /// Visit every live element in index order
    ///
    /// The visitor returns [`Visit::Continue`] to keep going, [`Visit::Stop`]
    /// to break early (a designed outcome, not an error), or an `Err` which
    /// halts iteration immediately and is propagated as the result.
    pub fn for_each<F>(&self, mut visitor: F) -> Result<()>
    where
        F: FnMut(&T) -> Result<Visit>,
    {
        for element in self.as_slice() {
            match visitor(element)? {
                Visit::Continue => {}
                Visit::Stop => break,
            }
        }
        Ok(())
    }

    /// Find the lowest index where `pred(target, element)` holds
    ///
    /// Linear scan from the front. Fails with `NotFound` when nothing
    /// matches.
    pub fn find_first<U: ?Sized, F>(&self, target: &U, mut pred: F) -> Result<usize>
    where
        F: FnMut(&U, &T) -> bool,
    {
        self.as_slice()
            .iter()
            .position(|element| pred(target, element))
            .ok_or(ParvecError::NotFound)
    }

    /// Find the highest index where `pred(target, element)` holds
    ///
    /// Linear scan from the back. Fails with `NotFound` when nothing matches.
    pub fn find_last<U: ?Sized, F>(&self, target: &U, mut pred: F) -> Result<usize>
    where
        F: FnMut(&U, &T) -> bool,
    {
        self.as_slice()
            .iter()
            .rposition(|element| pred(target, element))
            .ok_or(ParvecError::NotFound)
    }

    /// Extend the vector with elements from an iterator
    ///
    /// The iterator's reported length is only a reservation hint; every
    /// append is bounds-checked, so an iterator that misreports its length
    /// cannot write past the buffer.
    pub fn extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        self.reserve(iter.len())?;

        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    /// Fallible clone that reports allocation failure instead of panicking
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut new_vec = Self::with_capacity(self.len)?;
        for item in self.as_slice() {
            new_vec.push(item.clone())?;
        }
        Ok(new_vec)
    }
}

impl<T> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynVec<T> {
    fn drop(&mut self) {
        self.clear();
        self.release_buffer();
    }
}

impl<T> Deref for DynVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for DynVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynVec<T> {}

impl<T: Clone> Clone for DynVec<T> {
    fn clone(&self) -> Self {
        self.try_clone()
            .expect("allocation failed while cloning DynVec")
    }
}

// Safety: DynVec<T> owns its buffer exclusively and never aliases it,
// so it is Send/Sync exactly when T is.
unsafe impl<T: Send> Send for DynVec<T> {}
unsafe impl<T: Sync> Sync for DynVec<T> {}
