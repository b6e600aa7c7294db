//! Per-vertex edge records.
//!
//! An edge between `a` and `b` is stored twice: once in `a`'s adjacency map
//! under key `b`, and once in `b`'s under key `a`. Each record holds the
//! weight leaving its owner toward the neighbor (`to`) and the weight entering
//! its owner from the neighbor (`from`). The two records always mirror each
//! other: `a[b].to == b[a].from` and `a[b].from == b[a].to`.

use core::fmt::Debug;
use core::ops::Sub;
use num_traits::{Bounded, One, Zero};

/// Numeric edge weight.
///
/// `Zero` seeds accumulated path cost and `One` is the default edge weight.
/// `Bounded` lets path costs saturate instead of overflowing.
pub trait Weight: Copy + PartialOrd + Debug + Zero + One + Bounded + Sub<Output = Self> {
    /// Adds `rhs` to an accumulated cost, clamping at the type's bounds.
    ///
    /// A path whose cost would exceed `max_value()` costs exactly
    /// `max_value()`; it stays reachable and sorts after every cheaper path.
    fn accumulate(self, rhs: Self) -> Self {
        if rhs >= Self::zero() {
            if self > Self::max_value() - rhs {
                Self::max_value()
            } else {
                self + rhs
            }
        } else if self < Self::min_value() - rhs {
            Self::min_value()
        } else {
            self + rhs
        }
    }
}

impl<W> Weight for W where
    W: Copy + PartialOrd + Debug + Zero + One + Bounded + Sub<Output = W>
{
}

/// A directional weight; `None` means the direction is not traversable.
pub type EdgeWeight<W> = Option<W>;

/// One endpoint's view of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edge<W> {
    pub(crate) to: EdgeWeight<W>,
    pub(crate) from: EdgeWeight<W>,
}

impl<W: Copy> Edge<W> {
    /// Creates a record from its outgoing and incoming weights.
    pub fn new(to: EdgeWeight<W>, from: EdgeWeight<W>) -> Self {
        Self { to, from }
    }

    /// Weight leaving the owning vertex toward the neighbor.
    pub fn to(&self) -> EdgeWeight<W> {
        self.to
    }

    /// Weight entering the owning vertex from the neighbor.
    pub fn from(&self) -> EdgeWeight<W> {
        self.from
    }

    /// The record seen from the other endpoint.
    pub fn mirrored(&self) -> Self {
        Self {
            to: self.from,
            from: self.to,
        }
    }

    /// `true` when neither direction carries a weight.
    ///
    /// Nullified records are never left in an adjacency map.
    pub fn is_nullified(&self) -> bool {
        self.to.is_none() && self.from.is_none()
    }
}
