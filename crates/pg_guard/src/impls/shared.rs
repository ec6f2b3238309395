use alloc::rc::{self, Rc};
use alloc::sync::{self, Arc};
use core::ptr;

use crate::kind::{Capabilities, PointerKind};
use crate::pointer::{Access, Downgrade, Emplace, Nullable, OwnerOrder, Pointer, UseCount};

macro_rules! impl_shared {
    ($owner:ident, $module:ident) => {
        impl<T: ?Sized> Pointer for Option<$owner<T>> {
            type Element = T;

            const KIND: PointerKind = PointerKind::Shared;
            const CAPABILITIES: Capabilities = Capabilities::ACCESS
                .union(Capabilities::USE_COUNT)
                .union(Capabilities::DOWNGRADE)
                .union(Capabilities::EMPLACE)
                .union(Capabilities::OWNER_ORDER);

            #[inline]
            fn is_valid(&self) -> bool {
                self.is_some()
            }
        }

        impl<T: ?Sized> Nullable for Option<$owner<T>> {
            #[inline]
            fn null() -> Self {
                None
            }
        }

        impl<'a, T: ?Sized + 'a> Access<'a> for Option<$owner<T>> {
            type Target = &'a T;

            #[inline]
            fn access(&'a self) -> Option<&'a T> {
                self.as_deref()
            }
        }

        impl<T: ?Sized> UseCount for Option<$owner<T>> {
            #[inline]
            fn use_count(&self) -> usize {
                self.as_ref().map_or(0, $owner::strong_count)
            }

            #[inline]
            fn weak_count(&self) -> usize {
                self.as_ref().map_or(0, $owner::weak_count)
            }
        }

        impl<T> Downgrade for Option<$owner<T>> {
            type Observer = $module::Weak<T>;

            #[inline]
            fn downgrade(&self) -> Self::Observer {
                self.as_ref().map_or_else($module::Weak::new, $owner::downgrade)
            }
        }

        impl<T> Emplace for Option<$owner<T>> {
            #[inline]
            fn emplace(value: T) -> Self {
                Some($owner::new(value))
            }
        }

        impl<T: ?Sized> OwnerOrder for Option<$owner<T>> {
            #[inline]
            fn owner_addr(&self) -> *const () {
                self.as_ref()
                    .map_or(ptr::null(), |owner| $owner::as_ptr(owner).cast())
            }
        }
    };
}

impl_shared!(Rc, rc);
impl_shared!(Arc, sync);
