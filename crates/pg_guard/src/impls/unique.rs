use alloc::boxed::Box;

use crate::kind::{Capabilities, PointerKind};
use crate::pointer::{Access, AccessMut, Emplace, Nullable, Pointer, Release};

impl<T: ?Sized> Pointer for Option<Box<T>> {
    type Element = T;

    const KIND: PointerKind = PointerKind::Unique;
    const CAPABILITIES: Capabilities = Capabilities::ACCESS
        .union(Capabilities::ACCESS_MUT)
        .union(Capabilities::RELEASE)
        .union(Capabilities::EMPLACE);

    #[inline]
    fn is_valid(&self) -> bool {
        self.is_some()
    }
}

impl<T: ?Sized> Nullable for Option<Box<T>> {
    #[inline]
    fn null() -> Self {
        None
    }
}

impl<'a, T: ?Sized + 'a> Access<'a> for Option<Box<T>> {
    type Target = &'a T;

    #[inline]
    fn access(&'a self) -> Option<&'a T> {
        self.as_deref()
    }
}

impl<'a, T: ?Sized + 'a> AccessMut<'a> for Option<Box<T>> {
    type TargetMut = &'a mut T;

    #[inline]
    fn access_mut(&'a mut self) -> Option<&'a mut T> {
        self.as_deref_mut()
    }
}

impl<T: ?Sized> Release for Option<Box<T>> {
    type Released = Option<Box<T>>;

    #[inline]
    fn release(&mut self) -> Self::Released {
        self.take()
    }
}

impl<T> Emplace for Option<Box<T>> {
    #[inline]
    fn emplace(value: T) -> Self {
        Some(Box::new(value))
    }
}
