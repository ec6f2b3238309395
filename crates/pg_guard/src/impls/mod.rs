//! Capability impls for the pointer types of `core` and `alloc`.
//!
//! See [`Capabilities`](crate::Capabilities) for the resulting table.

mod borrowed;
mod shared;
mod unique;
mod weak;
