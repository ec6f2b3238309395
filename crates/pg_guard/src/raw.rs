use core::fmt;
use core::ptr;

/// A nullable raw pointer that may be dereferenced through a guard.
///
/// Creating a non-null `RawPtr` is `unsafe`: it is a promise that the pointer
/// stays dereferenceable for as long as it, or any copy of it, is used to
/// reach the pointee. The guard then only has to rule out null.
///
/// Ownership of the pointee stays with whoever created it. Dropping a
/// `RawPtr` never drops the pointee.
///
/// # Examples
///
/// ```
/// use pg_guard::{RawGuard, RawPtr};
///
/// let x = 10;
/// let guard = RawGuard::new(unsafe { RawPtr::new((&raw const x).cast_mut()) });
/// assert_eq!(guard.call(|x| *x), Some(10));
///
/// let guard = RawGuard::<i32>::null();
/// assert_eq!(guard.call(|x| *x), None);
/// ```
#[repr(transparent)]
pub struct RawPtr<T: ?Sized>(*mut T);

impl<T> RawPtr<T> {
    /// Creates a null `RawPtr`.
    #[inline]
    pub const fn null() -> Self {
        Self(ptr::null_mut())
    }
}

impl<T: ?Sized> RawPtr<T> {
    /// Wraps a raw pointer, which may be null.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null, for as long as this value or a copy of it is used
    /// to access the pointee:
    /// - `ptr` must be [convertible to a reference](https://doc.rust-lang.org/stable/core/ptr/index.html#pointer-to-reference-conversion).
    /// - no other reference may access the pointee in a way that conflicts
    ///   with the access handed out, exclusive access included.
    /// - copies count as other references: two copies must not be passed to
    ///   the same guarded call if either of them is passed by `&mut`.
    #[inline(always)]
    pub const unsafe fn new(ptr: *mut T) -> Self {
        Self(ptr)
    }

    /// Wraps a pointer derived from a mutable reference.
    ///
    /// # Safety
    ///
    /// The lifetime of `r` is erased; see [`RawPtr::new`].
    #[inline(always)]
    pub const unsafe fn from_mut(r: &mut T) -> Self {
        Self(r)
    }

    /// Acquires the underlying pointer.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut T {
        self.0
    }

    /// Returns `true` if the pointer is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Returns a shared reference to the pointee, `None` if null.
    ///
    /// Only the guard calls this, after the null check.
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        // Safety: non-null pointers are dereferenceable, see `RawPtr::new`.
        unsafe { self.0.as_ref() }
    }

    /// Returns an exclusive reference to the pointee, `None` if null.
    #[inline]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        // Safety: non-null pointers are dereferenceable, see `RawPtr::new`.
        unsafe { self.0.as_mut() }
    }
}

impl<T: ?Sized> Clone for RawPtr<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for RawPtr<T> {}

impl<T> Default for RawPtr<T> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> fmt::Pointer for RawPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.0, f)
    }
}

impl<T: ?Sized> fmt::Debug for RawPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawPtr({:p})", self.0)
    }
}
