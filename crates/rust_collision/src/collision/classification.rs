//! Tri-state collision test result

use serde::{Deserialize, Serialize};

/// Result of classifying one shape against another shape's region
///
/// The result is receiver-centric: `a.classify_x(&b)` reports how `a`
/// relates to the region occupied by `b`. For planes the "region" is the
/// positive half-space the normal points into.
///
/// Containment is strict: a shape whose boundary touches the other shape's
/// boundary reports [`Intersect`](Self::Intersect), not
/// [`Inside`](Self::Inside). Touching never reports
/// [`Outside`](Self::Outside).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// The shapes are disjoint
    Outside,
    /// The receiver is entirely within the other shape's region
    Inside,
    /// The shapes overlap partially or touch at their boundaries
    Intersect,
}

impl Classification {
    /// True for any result involving contact (`Inside` or `Intersect`)
    pub fn is_hit(self) -> bool {
        self != Self::Outside
    }
}
