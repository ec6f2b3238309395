//! Downcasting of guards over type-erased owners.
//!
//! A guard over `dyn Any` can be turned back into a guard over its concrete
//! type. An empty guard downcasts to an empty guard of any type, a guard
//! holding a different type is given back unchanged.
//!
//! ```
//! use core::any::Any;
//!
//! use pg_guard::{PtrGuard, UniqueGuard};
//!
//! let erased: Box<dyn Any> = Box::new(7u8);
//! let guard = PtrGuard::new(Some(erased));
//!
//! let guard = guard.downcast::<u16>().unwrap_err();
//! let guard: UniqueGuard<u8> = guard.downcast().unwrap();
//! assert_eq!(guard.call(|x| *x), Some(7));
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::any::Any;

use crate::guard::PtrGuard;

macro_rules! impl_downcast {
    ($owner:ident, $dyn:ty $(, $bound:path)*) => {
        impl PtrGuard<Option<$owner<$dyn>>> {
            /// Returns `true` if the pointee is a `T`.
            ///
            /// An empty guard is not a `T`.
            #[inline]
            pub fn is<T: Any>(&self) -> bool {
                self.call_or(false, |pointee| pointee.is::<T>())
            }

            /// Casts the guard to the concrete type of its pointee.
            ///
            /// # Errors
            ///
            /// Returns the guard unchanged if it holds something other than a `T`.
            pub fn downcast<T: Any $(+ $bound)*>(self) -> Result<PtrGuard<Option<$owner<T>>>, Self> {
                match self.into_inner() {
                    None => Ok(PtrGuard::new(None)),
                    Some(owner) => owner
                        .downcast::<T>()
                        .map(|owner| PtrGuard::new(Some(owner)))
                        .map_err(|owner| PtrGuard::new(Some(owner))),
                }
            }
        }
    };
}

impl_downcast!(Box, dyn Any);
impl_downcast!(Box, dyn Any + Send);
impl_downcast!(Rc, dyn Any);
impl_downcast!(Arc, dyn Any + Send + Sync, Send, Sync);
