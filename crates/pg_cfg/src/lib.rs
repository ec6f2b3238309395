//! Compile-time configuration aliases shared by the workspace crates.
//!
//! A crate declares its aliases once, in a `cfg` module:
//!
//! ```
//! pub mod cfg {
//!     pg_cfg::define_alias! {
//!         #[cfg(feature = "std")] => std,
//!         #[cfg(any(feature = "debug", debug_assertions))] => debug,
//!     }
//! }
//!
//! fn checked(x: u32) -> u32 {
//!     cfg::debug! { assert!(x < 100); }
//!     x + 1
//! }
//!
//! assert_eq!(checked(1), 2);
//! ```
//!
//! Each alias is a macro that either expands its input unchanged or expands to
//! nothing. Called with `if { .. } else { .. }` it picks one of the branches,
//! and called with no input it yields a `bool`.
#![no_std]

/// Expands its input unchanged.
///
/// This is what an alias resolves to when its condition holds.
///
/// ```
/// assert!(pg_cfg::enabled!());
/// assert_eq!(pg_cfg::enabled!(if { 1 } else { 2 }), 1);
/// ```
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Discards its input.
///
/// This is what an alias resolves to when its condition does not hold.
///
/// ```
/// assert!(!pg_cfg::disabled!());
/// assert_eq!(pg_cfg::disabled!(if { 1 } else { 2 }), 2);
/// ```
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Defines one macro alias per `cfg` predicate.
///
/// The alias is a re-export of [`enabled!`] or [`disabled!`], chosen by the
/// predicate when the calling crate is compiled.
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $name:ident),* $(,)?) => {
        $(
            #[cfg($meta)]
            #[doc = concat!("Expands its input because `", stringify!($meta), "` holds.")]
            pub use $crate::enabled as $name;

            #[cfg(not($meta))]
            #[doc = concat!("Discards its input because `", stringify!($meta), "` does not hold.")]
            pub use $crate::disabled as $name;
        )*
    };
}
