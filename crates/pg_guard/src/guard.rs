use alloc::boxed::Box;
use alloc::rc::{self, Rc};
use alloc::sync::{self, Arc};
use core::fmt;
use core::mem;

use crate::error::GuardError;
use crate::invoke::{skipped, GuardArg, GuardArgs};
use crate::kind::{Capabilities, PointerKind};
use crate::pointer::{
    Access, AccessMut, Downgrade, Emplace, Lock, Nullable, OwnerOrder, Pointer, Release, UseCount,
};
use crate::raw::RawPtr;

// -----------------------------------------------------------------------------
// PtrGuard

/// A pointer whose pointee can only be reached after a validity check.
///
/// `PtrGuard` keeps the semantics of the pointer `P` it wraps: it is `Clone`
/// or `Copy` exactly when `P` is, it drops the pointee exactly when `P`
/// would, and it has the capability methods `P` supports (see
/// [`Capabilities`]).
///
/// The pointee is only handed out inside a call, and only if the pointer is
/// valid at that moment.
///
/// # Examples
///
/// ```
/// use pg_guard::{make_guarded_shared, SharedGuard};
///
/// let mut guard = make_guarded_shared(String::from("pointee"));
/// assert_eq!(guard.call(|s| s.len()), Some(7));
///
/// let other = guard.clone();
/// assert_eq!(guard.use_count(), 2);
///
/// guard.reset();
/// assert_eq!(guard.call(|s| s.len()), None);
/// assert_eq!(guard.call_or(0, |s| s.len()), 0);
/// assert_eq!(other.use_count(), 1);
/// ```
#[repr(transparent)]
pub struct PtrGuard<P> {
    pointer: P,
}

/// A guard over a [`RawPtr`].
pub type RawGuard<T> = PtrGuard<RawPtr<T>>;
/// A guard over a borrowed reference.
pub type RefGuard<'a, T> = PtrGuard<Option<&'a T>>;
/// A guard over a mutably borrowed reference.
pub type MutGuard<'a, T> = PtrGuard<Option<&'a mut T>>;
/// A guard over a unique owner.
pub type UniqueGuard<T> = PtrGuard<Option<Box<T>>>;
/// A guard over a shared owner.
pub type SharedGuard<T> = PtrGuard<Option<Rc<T>>>;
/// A guard over a thread-safe shared owner.
pub type AtomicGuard<T> = PtrGuard<Option<Arc<T>>>;
/// A guard over a weak observer of a [`SharedGuard`] pointee.
pub type WeakGuard<T> = PtrGuard<rc::Weak<T>>;
/// A guard over a weak observer of an [`AtomicGuard`] pointee.
pub type AtomicWeakGuard<T> = PtrGuard<sync::Weak<T>>;

impl<P> PtrGuard<P> {
    /// Guards `pointer`.
    #[inline(always)]
    pub const fn new(pointer: P) -> Self {
        Self { pointer }
    }

    /// Removes the guard, returning the pointer.
    #[inline]
    pub fn into_inner(self) -> P {
        self.pointer
    }

    /// Replaces the guarded pointer, dropping the old one.
    #[inline]
    pub fn set(&mut self, pointer: P) {
        self.pointer = pointer;
    }

    /// Replaces the guarded pointer, returning the old one.
    #[inline]
    pub fn replace(&mut self, pointer: P) -> P {
        mem::replace(&mut self.pointer, pointer)
    }

    /// Swaps the pointers of two guards.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.pointer, &mut other.pointer);
    }

    /// Swaps the guarded pointer with an unguarded one.
    #[inline]
    pub fn swap_pointer(&mut self, pointer: &mut P) {
        mem::swap(&mut self.pointer, pointer);
    }

    /// Converts the guarded pointer into another pointer type.
    #[inline]
    pub fn convert<Q>(self) -> PtrGuard<Q>
    where
        P: Into<Q>,
    {
        PtrGuard::new(self.pointer.into())
    }
}

impl<P: Pointer> PtrGuard<P> {
    /// Returns `true` if the pointee can be accessed.
    ///
    /// A weak guard can expire right after this returns `true` if its owner
    /// lives on another thread; calls check again.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.pointer.is_valid()
    }

    /// The ownership category of the guarded pointer.
    #[inline]
    pub fn kind(&self) -> PointerKind {
        P::KIND
    }

    /// The capabilities of the guarded pointer.
    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        P::CAPABILITIES
    }

    /// Calls `f` with the target if the guard is valid.
    #[inline]
    pub fn try_call<'a, F, R>(&'a self, f: F) -> Result<R, GuardError>
    where
        P: Access<'a>,
        F: FnOnce(P::Target) -> R,
    {
        <&'a Self as GuardArg>::check(&self, 0)?;
        let target = <&'a Self as GuardArg>::project(self, 0)?;
        Ok(f(target))
    }

    /// Calls `f` with the target if the guard is valid.
    ///
    /// Returns `None` if the call was skipped.
    #[inline]
    pub fn call<'a, F, R>(&'a self, f: F) -> Option<R>
    where
        P: Access<'a>,
        F: FnOnce(P::Target) -> R,
    {
        skipped(self.try_call(f))
    }

    /// Calls `f` with the target, or returns `default` if the guard is invalid.
    #[inline]
    pub fn call_or<'a, F, R>(&'a self, default: R, f: F) -> R
    where
        P: Access<'a>,
        F: FnOnce(P::Target) -> R,
    {
        self.call(f).unwrap_or(default)
    }

    /// Calls `f` with the mutable target if the guard is valid.
    #[inline]
    pub fn try_call_mut<'a, F, R>(&'a mut self, f: F) -> Result<R, GuardError>
    where
        P: AccessMut<'a>,
        F: FnOnce(P::TargetMut) -> R,
    {
        <&'a mut Self as GuardArg>::check(&self, 0)?;
        let target = <&'a mut Self as GuardArg>::project(self, 0)?;
        Ok(f(target))
    }

    /// Calls `f` with the mutable target if the guard is valid.
    ///
    /// Returns `None` if the call was skipped.
    #[inline]
    pub fn call_mut<'a, F, R>(&'a mut self, f: F) -> Option<R>
    where
        P: AccessMut<'a>,
        F: FnOnce(P::TargetMut) -> R,
    {
        skipped(self.try_call_mut(f))
    }

    /// Calls `f` with the mutable target, or returns `default` if the guard
    /// is invalid.
    #[inline]
    pub fn call_mut_or<'a, F, R>(&'a mut self, default: R, f: F) -> R
    where
        P: AccessMut<'a>,
        F: FnOnce(P::TargetMut) -> R,
    {
        self.call_mut(f).unwrap_or(default)
    }

    /// Calls `f` with the target and the projected `args`, if this guard and
    /// every guard in `args` are valid.
    ///
    /// This guard is argument `0`, the elements of `args` are numbered from
    /// `1`. See [`invoke`](mod@crate::invoke) for how arguments are projected.
    ///
    /// ```
    /// use pg_guard::{make_guarded_unique, GuardError, UniqueGuard};
    ///
    /// let a = make_guarded_unique(2u32);
    /// let b = make_guarded_unique(3u32);
    /// let c = UniqueGuard::<u32>::null();
    ///
    /// let product = a.try_call_with((&b, 4u32), |a, (b, c)| a * b * c);
    /// assert_eq!(product, Ok(24));
    ///
    /// let product = a.try_call_with((&b, &c), |a, (b, c)| a * b * c);
    /// assert_eq!(product, Err(GuardError::Null { index: 2 }));
    /// ```
    pub fn try_call_with<'a, A, F, R>(&'a self, args: A, f: F) -> Result<R, GuardError>
    where
        P: Access<'a>,
        A: GuardArgs,
        F: FnOnce(P::Target, A::Output) -> R,
    {
        <&'a Self as GuardArg>::check(&self, 0)?;
        args.check_all(1)?;

        let target = <&'a Self as GuardArg>::project(self, 0)?;
        let rest = args.project_all(1)?;
        Ok(f(target, rest))
    }

    /// Like [`try_call_with`](Self::try_call_with), returning `None` if the
    /// call was skipped.
    #[inline]
    pub fn call_with<'a, A, F, R>(&'a self, args: A, f: F) -> Option<R>
    where
        P: Access<'a>,
        A: GuardArgs,
        F: FnOnce(P::Target, A::Output) -> R,
    {
        skipped(self.try_call_with(args, f))
    }

    /// Like [`try_call_with`](Self::try_call_with), returning `default` if
    /// the call was skipped.
    #[inline]
    pub fn call_with_or<'a, A, F, R>(&'a self, args: A, default: R, f: F) -> R
    where
        P: Access<'a>,
        A: GuardArgs,
        F: FnOnce(P::Target, A::Output) -> R,
    {
        self.call_with(args, f).unwrap_or(default)
    }
}

// -----------------------------------------------------------------------------
// Capabilities

impl<P: Nullable> PtrGuard<P> {
    /// Returns a guard over the null pointer.
    #[inline]
    pub fn null() -> Self {
        Self::new(P::null())
    }

    /// Makes the guarded pointer null, dropping the old one.
    #[inline]
    pub fn reset(&mut self) {
        self.pointer = P::null();
    }

    /// Takes the guarded pointer, leaving null in its place.
    #[inline]
    pub fn take(&mut self) -> P {
        mem::replace(&mut self.pointer, P::null())
    }
}

impl<P: Emplace> PtrGuard<P>
where
    P::Element: Sized,
{
    /// Guards a new allocation holding `value`.
    #[inline]
    pub fn emplace(value: P::Element) -> Self {
        let () = <P as Emplace>::DECLARED;
        Self::new(P::emplace(value))
    }

    /// Replaces the guarded pointer by a new allocation holding `value`.
    ///
    /// `value` is moved in before the old pointer is dropped.
    #[inline]
    pub fn reset_with(&mut self, value: P::Element) {
        let () = <P as Emplace>::DECLARED;
        self.pointer = P::emplace(value);
    }
}

impl<P: UseCount> PtrGuard<P> {
    /// The number of strong owners of the pointee.
    #[inline]
    pub fn use_count(&self) -> usize {
        let () = <P as UseCount>::DECLARED;
        self.pointer.use_count()
    }

    /// The number of weak observers of the pointee.
    #[inline]
    pub fn weak_count(&self) -> usize {
        let () = <P as UseCount>::DECLARED;
        self.pointer.weak_count()
    }
}

impl<P: Release> PtrGuard<P> {
    /// Gives up ownership of the pointee, leaving the guard null.
    #[inline]
    pub fn release(&mut self) -> P::Released {
        let () = <P as Release>::DECLARED;
        self.pointer.release()
    }
}

impl<P: Lock> PtrGuard<P> {
    /// Returns a guard over an owner of the pointee.
    ///
    /// The returned guard is null if the pointee has been dropped.
    #[inline]
    pub fn lock(&self) -> PtrGuard<P::Strong> {
        let () = <P as Lock>::DECLARED;
        PtrGuard::new(self.pointer.lock())
    }
}

impl<P: Downgrade> PtrGuard<P> {
    /// Returns a guard over an observer of the pointee.
    #[inline]
    pub fn downgrade(&self) -> PtrGuard<P::Observer> {
        let () = <P as Downgrade>::DECLARED;
        PtrGuard::new(self.pointer.downgrade())
    }
}

impl<P: OwnerOrder> PtrGuard<P> {
    /// Returns `true` if the owner of `self` orders before the owner of `other`.
    ///
    /// The order is by owner identity, so a shared guard and the weak guards
    /// observing it are equivalent.
    #[inline]
    pub fn owner_before<Q: OwnerOrder>(&self, other: &PtrGuard<Q>) -> bool {
        self.owner_addr().addr() < other.owner_addr().addr()
    }

    /// Returns `true` if the owner of `self` orders before the owner of `other`.
    #[inline]
    pub fn owner_before_pointer<Q: OwnerOrder>(&self, other: &Q) -> bool {
        let () = <Q as OwnerOrder>::DECLARED;
        self.owner_addr().addr() < other.owner_addr().addr()
    }

    /// Returns `true` if `self` and `other` share an owner.
    #[inline]
    pub fn owner_eq<Q: OwnerOrder>(&self, other: &PtrGuard<Q>) -> bool {
        self.owner_addr().addr() == other.owner_addr().addr()
    }

    #[inline]
    fn owner_addr(&self) -> *const () {
        let () = <P as OwnerOrder>::DECLARED;
        self.pointer.owner_addr()
    }
}

impl<T: ?Sized> PtrGuard<Option<Box<T>>> {
    /// Moves the pointee into a shared owner.
    #[inline]
    pub fn share(self) -> SharedGuard<T> {
        PtrGuard::new(self.pointer.map(Rc::from))
    }

    /// Moves the pointee into a thread-safe shared owner.
    #[inline]
    pub fn share_atomic(self) -> AtomicGuard<T> {
        PtrGuard::new(self.pointer.map(Arc::from))
    }
}

// -----------------------------------------------------------------------------
// Arguments

impl<'a, P: Access<'a>> GuardArg for &'a PtrGuard<P> {
    type Output = P::Target;

    #[inline]
    fn check(&self, index: usize) -> Result<(), GuardError> {
        let () = <P as Access<'a>>::DECLARED;
        if self.pointer.is_valid() {
            Ok(())
        } else {
            Err(GuardError::invalid(P::KIND, index))
        }
    }

    #[inline]
    fn project(self, index: usize) -> Result<P::Target, GuardError> {
        self.pointer
            .access()
            .ok_or(GuardError::invalid(P::KIND, index))
    }
}

impl<'a, P: AccessMut<'a>> GuardArg for &'a mut PtrGuard<P> {
    type Output = P::TargetMut;

    #[inline]
    fn check(&self, index: usize) -> Result<(), GuardError> {
        let () = <P as AccessMut<'a>>::DECLARED;
        if self.pointer.is_valid() {
            Ok(())
        } else {
            Err(GuardError::invalid(P::KIND, index))
        }
    }

    #[inline]
    fn project(self, index: usize) -> Result<P::TargetMut, GuardError> {
        self.pointer
            .access_mut()
            .ok_or(GuardError::invalid(P::KIND, index))
    }
}

// -----------------------------------------------------------------------------
// Construction

/// Guards a new unique allocation holding `value`.
#[inline]
pub fn make_guarded_unique<T>(value: T) -> UniqueGuard<T> {
    PtrGuard::emplace(value)
}

/// Guards a new shared allocation holding `value`.
#[inline]
pub fn make_guarded_shared<T>(value: T) -> SharedGuard<T> {
    PtrGuard::emplace(value)
}

/// Guards a new thread-safe shared allocation holding `value`.
#[inline]
pub fn make_guarded_atomic<T>(value: T) -> AtomicGuard<T> {
    PtrGuard::emplace(value)
}

impl<P: Nullable> Default for PtrGuard<P> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<P> From<P> for PtrGuard<P> {
    #[inline]
    fn from(pointer: P) -> Self {
        Self::new(pointer)
    }
}

impl<'a, T: ?Sized> From<&'a T> for PtrGuard<Option<&'a T>> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::new(Some(value))
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for PtrGuard<Option<&'a mut T>> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::new(Some(value))
    }
}

impl<T: ?Sized> From<Box<T>> for PtrGuard<Option<Box<T>>> {
    #[inline]
    fn from(value: Box<T>) -> Self {
        Self::new(Some(value))
    }
}

impl<T: ?Sized> From<Rc<T>> for PtrGuard<Option<Rc<T>>> {
    #[inline]
    fn from(value: Rc<T>) -> Self {
        Self::new(Some(value))
    }
}

impl<T: ?Sized> From<Arc<T>> for PtrGuard<Option<Arc<T>>> {
    #[inline]
    fn from(value: Arc<T>) -> Self {
        Self::new(Some(value))
    }
}

impl<T: ?Sized> From<&Rc<T>> for PtrGuard<rc::Weak<T>> {
    #[inline]
    fn from(owner: &Rc<T>) -> Self {
        Self::new(Rc::downgrade(owner))
    }
}

impl<T: ?Sized> From<&Arc<T>> for PtrGuard<sync::Weak<T>> {
    #[inline]
    fn from(owner: &Arc<T>) -> Self {
        Self::new(Arc::downgrade(owner))
    }
}

// -----------------------------------------------------------------------------
// Forwarded traits

impl<P: Clone> Clone for PtrGuard<P> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.pointer.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.pointer.clone_from(&source.pointer);
    }
}

impl<P: Copy> Copy for PtrGuard<P> {}

impl<P: Pointer> fmt::Debug for PtrGuard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PtrGuard")
            .field("kind", &P::KIND)
            .field("valid", &self.is_valid())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
