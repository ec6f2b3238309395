use thiserror::Error;

use crate::kind::PointerKind;

// -----------------------------------------------------------------------------
// Error

/// Why a guarded call did not run.
///
/// `index` is the position of the first invalid argument. For methods on
/// [`PtrGuard`](crate::PtrGuard), the guard itself is argument `0`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuardError {
    #[error("guarded argument {index} is null")]
    Null { index: usize },

    #[error("guarded argument {index} has expired")]
    Expired { index: usize },
}

impl GuardError {
    /// The error for an invalid pointer of `kind` at position `index`.
    #[inline]
    pub const fn invalid(kind: PointerKind, index: usize) -> Self {
        match kind {
            PointerKind::Weak => Self::Expired { index },
            _ => Self::Null { index },
        }
    }

    /// The position of the invalid argument.
    #[inline]
    pub const fn index(&self) -> usize {
        match *self {
            Self::Null { index } | Self::Expired { index } => index,
        }
    }

    /// The same error with its position moved `by` arguments to the right.
    #[inline]
    pub const fn shifted(self, by: usize) -> Self {
        match self {
            Self::Null { index } => Self::Null { index: index + by },
            Self::Expired { index } => Self::Expired { index: index + by },
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn invalid_by_kind() {
        assert_eq!(
            GuardError::invalid(PointerKind::Weak, 2),
            GuardError::Expired { index: 2 }
        );
        assert_eq!(
            GuardError::invalid(PointerKind::Unique, 0),
            GuardError::Null { index: 0 }
        );
    }

    #[test]
    fn shifted() {
        let err = GuardError::Null { index: 1 }.shifted(2);
        assert_eq!(err.index(), 3);
        assert_eq!(err.to_string(), "guarded argument 3 is null");
    }
}
