//! Strongly typed identifier wrappers and their counters.
//!
//! Ids are handed out by an [`IdCounter`] owned by whichever component
//! creates that entity kind: the pool owns the asset counter, the trip log
//! owns the trip counter.  Two counters never share state, so asset ids and
//! trip ids both run 1, 2, 3 … independently of each other.

use std::fmt;
use std::marker::PhantomData;

/// An id type that can be minted from a raw sequence number.
pub trait SequentialId: Copy {
    fn from_raw(raw: u32) -> Self;
}

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw sequence number.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl SequentialId for $name {
            #[inline(always)]
            fn from_raw(raw: u32) -> Self {
                $name(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of one physical asset.  Unique within a pool.
    pub struct AssetId(u32);
}

typed_id! {
    /// Identity of one trip record.  Unique within a trip log.
    pub struct TripId(u32);
}

// ── IdCounter ─────────────────────────────────────────────────────────────────

/// Monotonic id source for one entity kind.  The first id issued is 1.
#[derive(Clone, Debug)]
pub struct IdCounter<T: SequentialId> {
    next:  u32,
    _kind: PhantomData<T>,
}

impl<T: SequentialId> IdCounter<T> {
    pub fn new() -> Self {
        Self { next: 1, _kind: PhantomData }
    }

    /// Issue the next id.
    #[inline]
    pub fn next_id(&mut self) -> T {
        let id = T::from_raw(self.next);
        self.next += 1;
        id
    }

    /// How many ids this counter has issued so far.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl<T: SequentialId> Default for IdCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}
