//! The capability table of guarded pointers.
//!
//! [`Pointer`] is the only trait every guarded pointer implements. The other
//! traits are capabilities: a [`PtrGuard`](crate::PtrGuard) method exists for
//! a pointer type exactly when the matching capability is implemented.
//!
//! Each capability trait carries a `DECLARED` constant that fails to evaluate
//! when the implementing type did not list the capability in
//! [`Pointer::CAPABILITIES`]. The guard evaluates it before using the
//! capability.

use crate::kind::{Capabilities, PointerKind};

// -----------------------------------------------------------------------------
// Pointer

/// A pointer-like value that can be checked for validity.
///
/// # Examples
///
/// A pointer type that only knows whether it is set:
///
/// ```
/// use pg_guard::{Access, Capabilities, Pointer, PointerKind, PtrGuard};
///
/// struct Slot(Option<u32>);
///
/// impl Pointer for Slot {
///     type Element = u32;
///     const KIND: PointerKind = PointerKind::Unique;
///     const CAPABILITIES: Capabilities = Capabilities::ACCESS;
///
///     fn is_valid(&self) -> bool {
///         self.0.is_some()
///     }
/// }
///
/// impl<'a> Access<'a> for Slot {
///     type Target = &'a u32;
///
///     fn access(&'a self) -> Option<&'a u32> {
///         self.0.as_ref()
///     }
/// }
///
/// let guard = PtrGuard::new(Slot(Some(7)));
/// assert_eq!(guard.call(|x| *x + 1), Some(8));
///
/// let guard = PtrGuard::new(Slot(None));
/// assert_eq!(guard.call(|x| *x + 1), None);
/// ```
pub trait Pointer {
    /// The type of the pointee.
    type Element: ?Sized;

    /// The ownership category of this pointer type.
    const KIND: PointerKind;

    /// The capability traits this pointer type implements.
    const CAPABILITIES: Capabilities;

    /// Returns `true` if the pointee can be accessed.
    ///
    /// Non-null for every kind except [`PointerKind::Weak`], which tests
    /// that the pointee has not been dropped.
    fn is_valid(&self) -> bool;
}

/// A pointer with a null (or never-assigned) state.
pub trait Nullable: Pointer {
    /// Returns the invalid pointer.
    fn null() -> Self;
}

// -----------------------------------------------------------------------------
// Access

/// Shared access to the pointee.
///
/// Strong pointers hand out `&'a Element`. Weak pointers hand out the
/// upgraded owner, which keeps the pointee alive for as long as it is held.
pub trait Access<'a>: Pointer {
    /// What a guarded call receives in place of the pointer.
    type Target;

    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::ACCESS),
        "`Access` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// Returns the target, or `None` if the pointer is not valid.
    fn access(&'a self) -> Option<Self::Target>;
}

/// Exclusive access to the pointee.
pub trait AccessMut<'a>: Pointer {
    /// What a mutable guarded call receives in place of the pointer.
    type TargetMut;

    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::ACCESS_MUT),
        "`AccessMut` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// Returns the target, or `None` if the pointer is not valid.
    fn access_mut(&'a mut self) -> Option<Self::TargetMut>;
}

// -----------------------------------------------------------------------------
// Ownership

/// Reference counts of a shared pointee.
///
/// # Examples
///
/// The capability has to be listed in [`Pointer::CAPABILITIES`]:
///
/// ```
/// use pg_guard::{Capabilities, Pointer, PointerKind, PtrGuard, UseCount};
///
/// struct Counted(usize);
///
/// impl Pointer for Counted {
///     type Element = ();
///     const KIND: PointerKind = PointerKind::Shared;
///     const CAPABILITIES: Capabilities = Capabilities::USE_COUNT;
///
///     fn is_valid(&self) -> bool {
///         self.0 > 0
///     }
/// }
///
/// impl UseCount for Counted {
///     fn use_count(&self) -> usize {
///         self.0
///     }
///
///     fn weak_count(&self) -> usize {
///         0
///     }
/// }
///
/// assert_eq!(PtrGuard::new(Counted(2)).use_count(), 2);
/// ```
///
/// Using it through a guard fails to compile when it is not:
///
/// ```compile_fail,E0080
/// use pg_guard::{Capabilities, Pointer, PointerKind, PtrGuard, UseCount};
///
/// struct Counted(usize);
///
/// impl Pointer for Counted {
///     type Element = ();
///     const KIND: PointerKind = PointerKind::Shared;
///     const CAPABILITIES: Capabilities = Capabilities::ACCESS;
///
///     fn is_valid(&self) -> bool {
///         self.0 > 0
///     }
/// }
///
/// impl UseCount for Counted {
///     fn use_count(&self) -> usize {
///         self.0
///     }
///
///     fn weak_count(&self) -> usize {
///         0
///     }
/// }
///
/// assert_eq!(PtrGuard::new(Counted(2)).use_count(), 2);
/// ```
pub trait UseCount: Pointer {
    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::USE_COUNT),
        "`UseCount` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// The number of strong owners of the pointee, `0` when there is none.
    fn use_count(&self) -> usize;

    /// The number of weak observers of the pointee.
    fn weak_count(&self) -> usize;
}

/// A unique owner that can hand its pointee over to the caller.
pub trait Release: Pointer {
    /// The ownership handed out.
    type Released;

    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::RELEASE),
        "`Release` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// Gives up ownership of the pointee, leaving `self` null.
    fn release(&mut self) -> Self::Released;
}

/// An observer that can be upgraded to an owner.
pub trait Lock: Pointer {
    /// The owning pointer produced by [`lock`](Lock::lock).
    type Strong: Pointer<Element = Self::Element>;

    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::LOCK),
        "`Lock` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// Returns an owner of the pointee, null if the pointee is gone.
    fn lock(&self) -> Self::Strong;
}

/// An owner that can create observers of its pointee.
pub trait Downgrade: Pointer {
    /// The observing pointer produced by [`downgrade`](Downgrade::downgrade).
    type Observer: Pointer<Element = Self::Element>;

    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::DOWNGRADE),
        "`Downgrade` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// Returns an observer of the pointee, expired if `self` is null.
    fn downgrade(&self) -> Self::Observer;
}

/// An owner that can allocate a new pointee.
pub trait Emplace: Pointer {
    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::EMPLACE),
        "`Emplace` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// Moves `value` into a new allocation owned by the returned pointer.
    fn emplace(value: Self::Element) -> Self
    where
        Self::Element: Sized;
}

/// Pointers whose owners can be compared by identity.
///
/// Two pointers share an owner when they refer to the same allocation, even
/// if one of them is a weak observer.
pub trait OwnerOrder: Pointer {
    #[doc(hidden)]
    const DECLARED: () = assert!(
        Self::CAPABILITIES.contains(Capabilities::OWNER_ORDER),
        "`OwnerOrder` is implemented but not declared in `Pointer::CAPABILITIES`",
    );

    /// The address identifying the owner, null when there is none.
    fn owner_addr(&self) -> *const ();
}
