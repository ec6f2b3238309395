//! All-or-nothing invocation.
//!
//! A callable is invoked with a tuple of arguments, some of them guards and
//! some of them plain values. Every guard is replaced by its target and every
//! plain value is passed through unchanged, but only after every guard has been
//! checked. If one of them is invalid, nothing is accessed and the callable is
//! not invoked.
//!
//! Dispatch is done by trait selection on the argument types:
//!
//! - `&PtrGuard<P>` where `P: Access` passes [`Access::Target`].
//! - `&mut PtrGuard<P>` where `P: AccessMut` passes [`AccessMut::TargetMut`].
//! - Primitive scalars, `&str`, `()` and [`Plain<T>`] are passed through.
//!
//! ```
//! use pg_guard::{invoke, make_guarded_shared, MutGuard, SharedGuard};
//!
//! let name = make_guarded_shared(String::from("ferris"));
//! let mut total = 0u32;
//! let mut counter = MutGuard::from(&mut total);
//!
//! let len = invoke(
//!     |name: &String, sep: char, total: &mut u32| {
//!         *total += 1;
//!         format!("{name}{sep}").len()
//!     },
//!     (&name, '!', &mut counter),
//! );
//! assert_eq!(len, Some(7));
//!
//! let empty = SharedGuard::<String>::null();
//! let len = invoke(|a: &String, b: &String| a.len() + b.len(), (&name, &empty));
//! assert_eq!(len, None);
//! # drop(counter);
//! # assert_eq!(total, 1);
//! ```
//!
//! [`Access::Target`]: crate::Access::Target
//! [`AccessMut::TargetMut`]: crate::AccessMut::TargetMut

use pg_utils::range_invoke;

use crate::error::GuardError;

// -----------------------------------------------------------------------------
// GuardArg

/// A single argument of a guarded call.
///
/// Calls go through two phases: every argument is [`check`]ed, and only if
/// all of them pass is every argument [`project`]ed.
///
/// [`check`]: GuardArg::check
/// [`project`]: GuardArg::project
pub trait GuardArg: Sized {
    /// The value the callable receives.
    type Output;

    /// Verifies the argument can be projected, without accessing the pointee.
    fn check(&self, index: usize) -> Result<(), GuardError>;

    /// Replaces the argument by what the callable receives.
    ///
    /// Fails only if the argument became invalid after its check, which is
    /// possible for weak pointers shared across threads.
    fn project(self, index: usize) -> Result<Self::Output, GuardError>;
}

/// A value passed through a guarded call unchanged.
///
/// Scalars and `&str` are passed through as they are. Other values are
/// wrapped in `Plain`.
///
/// ```
/// use pg_guard::{invoke, make_guarded_unique, Plain};
///
/// let guard = make_guarded_unique(2usize);
/// let items = invoke(
///     |n: &usize, mut items: Vec<u8>| {
///         items.truncate(*n);
///         items
///     },
///     (&guard, Plain(vec![1, 2, 3])),
/// );
/// assert_eq!(items, Some(vec![1, 2]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plain<T>(pub T);

impl<T> GuardArg for Plain<T> {
    type Output = T;

    #[inline(always)]
    fn check(&self, _index: usize) -> Result<(), GuardError> {
        Ok(())
    }

    #[inline(always)]
    fn project(self, _index: usize) -> Result<T, GuardError> {
        Ok(self.0)
    }
}

macro_rules! impl_plain_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl GuardArg for $ty {
                type Output = $ty;

                #[inline(always)]
                fn check(&self, _index: usize) -> Result<(), GuardError> {
                    Ok(())
                }

                #[inline(always)]
                fn project(self, _index: usize) -> Result<$ty, GuardError> {
                    Ok(self)
                }
            }
        )*
    };
}

impl_plain_arg!(
    (), bool, char, f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

impl<'a> GuardArg for &'a str {
    type Output = &'a str;

    #[inline(always)]
    fn check(&self, _index: usize) -> Result<(), GuardError> {
        Ok(())
    }

    #[inline(always)]
    fn project(self, _index: usize) -> Result<&'a str, GuardError> {
        Ok(self)
    }
}

// -----------------------------------------------------------------------------
// GuardArgs and GuardFn

/// A tuple of [`GuardArg`]s.
///
/// This trait is implemented for tuples up to 12 items long.
pub trait GuardArgs: Sized {
    /// The tuple of projected arguments.
    type Output;

    /// Checks every argument, numbering them from `offset`.
    ///
    /// Returns the error of the first invalid argument.
    fn check_all(&self, offset: usize) -> Result<(), GuardError>;

    /// Projects every argument, numbering them from `offset`.
    ///
    /// Must only be called after [`check_all`](GuardArgs::check_all) passed.
    fn project_all(self, offset: usize) -> Result<Self::Output, GuardError>;
}

/// A callable that accepts the projected form of `Args`.
///
/// Implemented for every `FnOnce` with matching parameters.
pub trait GuardFn<Args: GuardArgs> {
    /// The return type of the callable.
    type Output;

    /// Invokes the callable with the projected arguments spread out.
    fn apply(self, args: Args::Output) -> Self::Output;
}

macro_rules! impl_guard_args {
    (@impl [$($attr:meta),*] [$($fn_attr:meta),*] [$($index:tt : $name:ident),*]) => {
        $(#[$attr])*
        #[allow(non_snake_case, unused_variables, reason = "macro implementation.")]
        impl<$($name: GuardArg),*> GuardArgs for ($($name,)*) {
            type Output = ($(<$name as GuardArg>::Output,)*);

            #[inline]
            fn check_all(&self, offset: usize) -> Result<(), GuardError> {
                let ($($name,)*) = self;
                $( <$name as GuardArg>::check($name, offset + $index)?; )*
                Ok(())
            }

            #[inline]
            fn project_all(self, offset: usize) -> Result<Self::Output, GuardError> {
                let ($($name,)*) = self;
                Ok(($( <$name as GuardArg>::project($name, offset + $index)?, )*))
            }
        }

        $(#[$fn_attr])*
        #[allow(non_snake_case, reason = "macro implementation.")]
        impl<Func, Out, $($name: GuardArg),*> GuardFn<($($name,)*)> for Func
        where
            Func: FnOnce($(<$name as GuardArg>::Output),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn apply(self, ($($name,)*): ($(<$name as GuardArg>::Output,)*)) -> Out {
                self($($name),*)
            }
        }
    };
    (0: []) => {
        impl_guard_args!(@impl [] [] []);
    };
    (1: [$index:tt : $name:ident]) => {
        impl_guard_args!(@impl [
            cfg_attr(docsrs, doc(fake_variadic)),
            cfg_attr(docsrs, doc = "This trait is implemented for tuples up to 12 items long.")
        ] [] [$index : $name]);
    };
    ($num:literal : [$($index:tt : $name:ident),*]) => {
        impl_guard_args!(
            @impl [cfg_attr(docsrs, doc(hidden))] [cfg_attr(docsrs, doc(hidden))] [$($index : $name),*]
        );
    };
}

range_invoke! {
    impl_guard_args, 12: P
}

// -----------------------------------------------------------------------------
// Invocation

/// Returns `true` if every guard in `args` is valid.
///
/// Plain values are always valid, so an empty tuple or a tuple without
/// guards is valid.
#[inline]
pub fn all_valid<A: GuardArgs>(args: &A) -> bool {
    args.check_all(0).is_ok()
}

/// Invokes `f` with `args` if every guard in `args` is valid.
///
/// Returns the error of the first invalid argument otherwise, without
/// accessing any of them.
pub fn try_invoke<A, F>(f: F, args: A) -> Result<F::Output, GuardError>
where
    A: GuardArgs,
    F: GuardFn<A>,
{
    args.check_all(0)?;
    let projected = args.project_all(0)?;
    Ok(f.apply(projected))
}

/// Invokes `f` with `args` if every guard in `args` is valid.
///
/// Returns `None` if the call was skipped.
#[inline]
pub fn invoke<A, F>(f: F, args: A) -> Option<F::Output>
where
    A: GuardArgs,
    F: GuardFn<A>,
{
    skipped(try_invoke(f, args))
}

/// Invokes `f` with `args`, or returns `default` if a guard is invalid.
#[inline]
pub fn invoke_or<A, F>(f: F, default: F::Output, args: A) -> F::Output
where
    A: GuardArgs,
    F: GuardFn<A>,
{
    invoke(f, args).unwrap_or(default)
}

/// Invokes `f` with `args`, or computes a default if a guard is invalid.
#[inline]
pub fn invoke_or_else<A, F, D>(f: F, default: D, args: A) -> F::Output
where
    A: GuardArgs,
    F: GuardFn<A>,
    D: FnOnce() -> F::Output,
{
    invoke(f, args).unwrap_or_else(default)
}

/// Discards the reason a call was skipped, tracing it in debug builds.
#[inline]
pub(crate) fn skipped<R>(result: Result<R, GuardError>) -> Option<R> {
    result
        .inspect_err(|_err| {
            crate::cfg::debug! {
                log::trace!("guarded call skipped: {_err}");
            }
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::*;
    use crate::fixture::{Drops, Pointee};
    use crate::{
        make_guarded_shared, make_guarded_unique, MutGuard, RawGuard, RawPtr, RefGuard,
        SharedGuard, UniqueGuard, WeakGuard,
    };

    #[test]
    fn no_arguments() {
        assert!(all_valid(&()));
        assert_eq!(invoke(|| 3, ()), Some(3));
    }

    #[test]
    fn plain_arguments_are_always_valid() {
        let args = (1i32, 2u8, 'c', "str", true);
        assert!(all_valid(&args));

        let sum = invoke(
            |a: i32, b: u8, c: char, s: &str, t: bool| {
                a + i32::from(b) + c.len_utf8() as i32 + s.len() as i32 + i32::from(t)
            },
            args,
        );
        assert_eq!(sum, Some(1 + 2 + 1 + 3 + 1));
    }

    #[test]
    fn mixed_arguments() {
        let pointee = Pointee::new(1);
        let guard = RefGuard::from(&pointee);
        let other = make_guarded_unique(Pointee::new(2));

        let called = Cell::new(false);
        invoke(
            |a: &Pointee, one: i32, b: &Pointee, two: i32, c: &Pointee, three: i32| {
                assert_eq!((a.id, b.id, c.id), (1, 2, 2));
                assert_eq!((one, two, three), (1, 2, 3));
                called.set(true);
            },
            (&guard, 1i32, &other, 2i32, &other, 3i32),
        );
        assert!(called.get());
    }

    #[test]
    fn one_invalid_argument_skips_the_call() {
        let pointee = Pointee::new(1);
        let guard = RefGuard::from(&pointee);
        let empty = RawGuard::<Pointee>::null();

        let called = Cell::new(false);
        let result = try_invoke(
            |_: &Pointee, _: i32, _: &Pointee, _: i32| called.set(true),
            (&guard, 1i32, &empty, 2i32),
        );
        assert!(!called.get());
        assert_eq!(result, Err(GuardError::Null { index: 2 }));
        assert!(!all_valid(&(&guard, 1i32, &empty, 2i32)));
    }

    struct Probe<'a>(&'a Cell<bool>);

    impl GuardArg for Probe<'_> {
        type Output = ();

        fn check(&self, _index: usize) -> Result<(), GuardError> {
            Ok(())
        }

        fn project(self, _index: usize) -> Result<(), GuardError> {
            self.0.set(true);
            Ok(())
        }
    }

    #[test]
    fn invalid_arguments_are_not_projected() {
        let drops = Drops::new();
        let owner = make_guarded_shared(drops.pointee(1));
        let empty = UniqueGuard::<Pointee>::null();
        let projected = Cell::new(false);

        let result = invoke(
            |_: (), _: &Pointee, _: &Pointee| (),
            (Probe(&projected), &owner, &empty),
        );
        assert_eq!(result, None);
        assert!(!projected.get());
        assert_eq!(owner.use_count(), 1);
        assert_eq!(drops.count(), 0);

        let full = make_guarded_unique(Pointee::new(2));
        let result = invoke(
            |_: (), _: &Pointee, _: &Pointee| (),
            (Probe(&projected), &owner, &full),
        );
        assert_eq!(result, Some(()));
        assert!(projected.get());
    }

    #[test]
    fn first_invalid_argument_is_reported() {
        let a = SharedGuard::<u8>::null();
        let b = WeakGuard::<u8>::null();

        assert_eq!(
            try_invoke(|_: &u8, _: Rc<u8>| (), (&a, &b)),
            Err(GuardError::Null { index: 0 })
        );
        let a = make_guarded_shared(1u8);
        assert_eq!(
            try_invoke(|_: &u8, _: Rc<u8>| (), (&a, &b)),
            Err(GuardError::Expired { index: 1 })
        );
    }

    #[test]
    fn weak_arguments_are_upgraded() {
        let owner = make_guarded_shared(Pointee::new(4));
        let observer = owner.downgrade();

        let count = invoke(
            |strong: Rc<Pointee>, n: u32| {
                assert_eq!(strong.id + n, 5);
                Rc::strong_count(&strong)
            },
            (&observer, 1u32),
        );
        assert_eq!(count, Some(2));
        assert_eq!(owner.use_count(), 1);
    }

    #[test]
    fn mutable_arguments() {
        let mut a = make_guarded_unique(1u32);
        let mut b = 10u32;
        let mut b_guard = MutGuard::from(&mut b);

        invoke(
            |a: &mut u32, b: &mut u32| {
                core::mem::swap(a, b);
            },
            (&mut a, &mut b_guard),
        );
        drop(b_guard);

        assert_eq!(a.call(|a| *a), Some(10));
        assert_eq!(b, 1);
    }

    #[test]
    fn raw_arguments() {
        let mut x = 3i64;
        let mut guard = RawGuard::new(unsafe { RawPtr::from_mut(&mut x) });

        invoke(|x: &mut i64, by: i64| *x *= by, (&mut guard, 5i64));
        assert_eq!(invoke(|x: &i64| *x, (&guard,)), Some(15));
    }

    #[test]
    fn plain_values_move_through() {
        let guard = make_guarded_unique(1u8);
        let log = invoke(
            |n: &u8, mut log: Vec<String>, suffix: &str| {
                log.push(alloc::format!("{n}{suffix}"));
                log
            },
            (&guard, Plain(Vec::new()), "!"),
        );
        assert_eq!(log, Some(alloc::vec![String::from("1!")]));
    }

    #[test]
    fn defaults() {
        let empty = SharedGuard::<u32>::null();
        let full = make_guarded_shared(2u32);

        assert_eq!(invoke_or(|x: &u32| *x, 0, (&empty,)), 0);
        assert_eq!(invoke_or(|x: &u32| *x, 0, (&full,)), 2);
        assert_eq!(invoke_or_else(|x: &u32| *x, || 9, (&empty,)), 9);
    }

    #[test]
    fn twelve_arguments() {
        let g = make_guarded_unique(1u8);
        let sum = invoke(
            |a: &u8, b: &u8, c: &u8, d: &u8, e: &u8, f: &u8,
             g: &u8, h: &u8, i: &u8, j: &u8, k: &u8, l: u8| {
                a + b + c + d + e + f + g + h + i + j + k + l
            },
            (&g, &g, &g, &g, &g, &g, &g, &g, &g, &g, &g, 1u8),
        );
        assert_eq!(sum, Some(12));
    }
}
