//! Cooker outcome codes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a tether cook, fixed once the cooker has been constructed.
///
/// Any status other than [`CookerStatus::Success`] means the input geometry
/// was rejected. The cooker's tether data is then inert: every slot holds
/// [`NO_ANCHOR`](crate::NO_ANCHOR) with a zero rest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CookerStatus {
    /// Tethers were computed.
    #[default]
    Success,
    /// An edge is shared by more than two faces.
    NonManifoldInput,
    /// Two faces sharing an edge traverse it in the same direction.
    InconsistentWinding,
}

impl CookerStatus {
    /// Numeric status code: 0 for success, 1 for non-manifold input,
    /// 2 for inconsistent winding.
    ///
    /// # Example
    ///
    /// ```
    /// use cloth_tether::CookerStatus;
    ///
    /// assert_eq!(CookerStatus::Success.code(), 0);
    /// assert_eq!(CookerStatus::InconsistentWinding.code(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Success => 0,
            Self::NonManifoldInput => 1,
            Self::InconsistentWinding => 2,
        }
    }

    /// Whether the cook succeeded.
    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for CookerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::NonManifoldInput => write!(f, "non-manifold input"),
            Self::InconsistentWinding => write!(f, "inconsistent winding"),
        }
    }
}
