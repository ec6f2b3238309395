use core::fmt;

use bitflags::bitflags;

// -----------------------------------------------------------------------------
// PointerKind

/// The ownership category of a guarded pointer.
///
/// The kind decides how validity is tested: observers of another owner's
/// pointee ([`Weak`](PointerKind::Weak)) become invalid when they expire,
/// every other kind is invalid when it is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A raw pointer. Ownership is managed elsewhere.
    Raw,
    /// A borrowed reference, possibly absent.
    Borrowed,
    /// A pointer that solely owns its pointee, like `Box`.
    Unique,
    /// A reference-counted owner, like `Rc` or `Arc`.
    Shared,
    /// A non-owning observer of a shared pointee.
    Weak,
}

impl PointerKind {
    /// Returns `true` if the pointer is responsible for dropping its pointee.
    #[inline]
    pub const fn is_owning(self) -> bool {
        matches!(self, Self::Unique | Self::Shared)
    }

    /// Returns `true` if the pointer only observes a pointee owned elsewhere.
    #[inline]
    pub const fn is_observer(self) -> bool {
        !self.is_owning()
    }
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Raw => "raw",
            Self::Borrowed => "borrowed",
            Self::Unique => "unique",
            Self::Shared => "shared",
            Self::Weak => "weak",
        })
    }
}

// -----------------------------------------------------------------------------
// Capabilities

bitflags! {
    /// The operations a pointer type supports beyond the validity check.
    ///
    /// Every [`Pointer`](crate::Pointer) declares its set in
    /// [`CAPABILITIES`](crate::Pointer::CAPABILITIES). Using a capability
    /// trait whose flag was not declared fails to compile. A declared flag
    /// without its trait impl is not detected: it is only reported by
    /// [`PtrGuard::capabilities`](crate::PtrGuard::capabilities), and the
    /// guard methods of that capability stay unavailable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        /// Shared access to the pointee, see [`Access`](crate::Access).
        const ACCESS      = 1 << 0;
        /// Exclusive access to the pointee, see [`AccessMut`](crate::AccessMut).
        const ACCESS_MUT  = 1 << 1;
        /// Reference counts, see [`UseCount`](crate::UseCount).
        const USE_COUNT   = 1 << 2;
        /// Giving up ownership, see [`Release`](crate::Release).
        const RELEASE     = 1 << 3;
        /// Upgrading an observer, see [`Lock`](crate::Lock).
        const LOCK        = 1 << 4;
        /// Creating an observer, see [`Downgrade`](crate::Downgrade).
        const DOWNGRADE   = 1 << 5;
        /// Allocating a new pointee, see [`Emplace`](crate::Emplace).
        const EMPLACE     = 1 << 6;
        /// Owner-based ordering, see [`OwnerOrder`](crate::OwnerOrder).
        const OWNER_ORDER = 1 << 7;
    }
}
