use alloc::rc::{self, Rc};
use alloc::sync::{self, Arc};

use core::ptr;

use crate::kind::{Capabilities, PointerKind};
use crate::pointer::{Access, Lock, Nullable, OwnerOrder, Pointer, UseCount};

/// `Weak::new` points at `usize::MAX` instead of an allocation.
#[inline]
fn unallocated_to_null(addr: *const ()) -> *const () {
    if addr.addr() == usize::MAX {
        ptr::null()
    } else {
        addr
    }
}

macro_rules! impl_weak {
    ($module:ident, $owner:ident) => {
        impl<T: ?Sized> Pointer for $module::Weak<T> {
            type Element = T;

            const KIND: PointerKind = PointerKind::Weak;
            const CAPABILITIES: Capabilities = Capabilities::ACCESS
                .union(Capabilities::USE_COUNT)
                .union(Capabilities::LOCK)
                .union(Capabilities::OWNER_ORDER);

            #[inline]
            fn is_valid(&self) -> bool {
                self.strong_count() > 0
            }
        }

        impl<T> Nullable for $module::Weak<T> {
            #[inline]
            fn null() -> Self {
                $module::Weak::new()
            }
        }

        // The owner is upgraded for the duration of the call, so the pointee
        // cannot be dropped while it is being accessed.
        impl<'a, T: ?Sized + 'a> Access<'a> for $module::Weak<T> {
            type Target = $owner<T>;

            #[inline]
            fn access(&'a self) -> Option<$owner<T>> {
                self.upgrade()
            }
        }

        impl<T: ?Sized> UseCount for $module::Weak<T> {
            #[inline]
            fn use_count(&self) -> usize {
                self.strong_count()
            }

            #[inline]
            fn weak_count(&self) -> usize {
                $module::Weak::weak_count(self)
            }
        }

        impl<T: ?Sized> Lock for $module::Weak<T> {
            type Strong = Option<$owner<T>>;

            #[inline]
            fn lock(&self) -> Self::Strong {
                self.upgrade()
            }
        }

        impl<T: ?Sized> OwnerOrder for $module::Weak<T> {
            #[inline]
            fn owner_addr(&self) -> *const () {
                unallocated_to_null(self.as_ptr().cast())
            }
        }
    };
}

impl_weak!(rc, Rc);
impl_weak!(sync, Arc);
