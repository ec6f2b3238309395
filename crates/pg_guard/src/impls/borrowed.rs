use crate::kind::{Capabilities, PointerKind};
use crate::pointer::{Access, AccessMut, Nullable, Pointer};
use crate::raw::RawPtr;

// -----------------------------------------------------------------------------
// RawPtr

impl<T: ?Sized> Pointer for RawPtr<T> {
    type Element = T;

    const KIND: PointerKind = PointerKind::Raw;
    const CAPABILITIES: Capabilities = Capabilities::ACCESS.union(Capabilities::ACCESS_MUT);

    #[inline]
    fn is_valid(&self) -> bool {
        !self.is_null()
    }
}

impl<T> Nullable for RawPtr<T> {
    #[inline]
    fn null() -> Self {
        RawPtr::null()
    }
}

impl<'a, T: ?Sized + 'a> Access<'a> for RawPtr<T> {
    type Target = &'a T;

    #[inline]
    fn access(&'a self) -> Option<&'a T> {
        self.get()
    }
}

impl<'a, T: ?Sized + 'a> AccessMut<'a> for RawPtr<T> {
    type TargetMut = &'a mut T;

    #[inline]
    fn access_mut(&'a mut self) -> Option<&'a mut T> {
        self.get_mut()
    }
}

// -----------------------------------------------------------------------------
// Option<&T>

impl<T: ?Sized> Pointer for Option<&T> {
    type Element = T;

    const KIND: PointerKind = PointerKind::Borrowed;
    const CAPABILITIES: Capabilities = Capabilities::ACCESS;

    #[inline]
    fn is_valid(&self) -> bool {
        self.is_some()
    }
}

impl<T: ?Sized> Nullable for Option<&T> {
    #[inline]
    fn null() -> Self {
        None
    }
}

impl<'a, 'b: 'a, T: ?Sized> Access<'a> for Option<&'b T> {
    type Target = &'a T;

    #[inline]
    fn access(&'a self) -> Option<&'a T> {
        *self
    }
}

// -----------------------------------------------------------------------------
// Option<&mut T>

impl<T: ?Sized> Pointer for Option<&mut T> {
    type Element = T;

    const KIND: PointerKind = PointerKind::Borrowed;
    const CAPABILITIES: Capabilities = Capabilities::ACCESS.union(Capabilities::ACCESS_MUT);

    #[inline]
    fn is_valid(&self) -> bool {
        self.is_some()
    }
}

impl<T: ?Sized> Nullable for Option<&mut T> {
    #[inline]
    fn null() -> Self {
        None
    }
}

impl<'a, 'b: 'a, T: ?Sized> Access<'a> for Option<&'b mut T> {
    type Target = &'a T;

    #[inline]
    fn access(&'a self) -> Option<&'a T> {
        self.as_deref()
    }
}

impl<'a, 'b: 'a, T: ?Sized> AccessMut<'a> for Option<&'b mut T> {
    type TargetMut = &'a mut T;

    #[inline]
    fn access_mut(&'a mut self) -> Option<&'a mut T> {
        self.as_deref_mut()
    }
}
