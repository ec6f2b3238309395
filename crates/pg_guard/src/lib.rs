//! Guarded pointers and all-or-nothing invocation.
//!
//! A [`PtrGuard`] wraps a pointer (a raw pointer, a borrow, a [`Box`], an
//! [`Rc`], an [`Arc`] or one of their weak observers) and only hands out the
//! pointee inside a call, after checking that the pointer is valid:
//!
//! ```
//! use pg_guard::{invoke, make_guarded_shared, make_guarded_unique};
//!
//! let a = make_guarded_unique(2);
//! let b = make_guarded_shared(3);
//! let weak = b.downgrade();
//!
//! assert_eq!(invoke(|a: &i32, b: std::rc::Rc<i32>| *a * *b, (&a, &weak)), Some(6));
//!
//! drop(b);
//! assert_eq!(invoke(|a: &i32, b: std::rc::Rc<i32>| *a * *b, (&a, &weak)), None);
//! ```
//!
//! What a guard can do besides calling depends on its pointer type, see
//! [`Capabilities`] and the [`pointer`] module.
//!
//! [`Box`]: alloc::boxed::Box
//! [`Rc`]: alloc::rc::Rc
//! [`Arc`]: alloc::sync::Arc
#![expect(unsafe_code, reason = "Raw pointers are inherently unsafe.")]
#![cfg_attr(docsrs, feature(doc_cfg, rustdoc_internals))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

pub mod cfg {
    pg_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(any(feature = "debug", debug_assertions))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cast;
mod error;
mod guard;
mod impls;
mod kind;
mod raw;

pub mod invoke;
pub mod pointer;

#[cfg(test)]
mod fixture;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::GuardError;
pub use guard::{
    AtomicGuard, AtomicWeakGuard, MutGuard, PtrGuard, RawGuard, RefGuard, SharedGuard, UniqueGuard,
    WeakGuard, make_guarded_atomic, make_guarded_shared, make_guarded_unique,
};
pub use invoke::{
    GuardArg, GuardArgs, GuardFn, Plain, all_valid, invoke, invoke_or, invoke_or_else, try_invoke,
};
pub use kind::{Capabilities, PointerKind};
pub use pointer::{
    Access, AccessMut, Downgrade, Emplace, Lock, Nullable, OwnerOrder, Pointer, Release, UseCount,
};
pub use raw::RawPtr;
