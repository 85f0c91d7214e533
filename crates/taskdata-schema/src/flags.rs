use crate::prelude::*;
use derive_more::Display;
use serde::Serializer;
use std::fmt;

///
/// Flag
///
/// Behavioral flags of a field. `Attribute`, `Operation`, and `People`
/// select the attribute kind (with that precedence); `ReadOnly` is
/// orthogonal.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Flag {
    Attribute,
    Operation,
    People,
    ReadOnly,
}

impl Flag {
    pub const ALL: [Self; 4] = [Self::Attribute, Self::Operation, Self::People, Self::ReadOnly];
}

///
/// FlagSet
///
/// Small copy-on-ingest set of flags. Plain `Copy` bits, so a descriptor's
/// set is never shared with the caller's or with another descriptor.
///

#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct FlagSet(u8);

impl FlagSet {
    pub const EMPTY: Self = Self(0);

    const fn bit(flag: Flag) -> u8 {
        1 << flag as u8
    }

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[must_use]
    pub const fn of(flags: &[Flag]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < flags.len() {
            bits |= Self::bit(flags[i]);
            i += 1;
        }

        Self(bits)
    }

    #[must_use]
    pub const fn contains(&self, flag: Flag) -> bool {
        self.0 & Self::bit(flag) != 0
    }

    pub const fn insert(&mut self, flag: Flag) {
        self.0 |= Self::bit(flag);
    }

    pub const fn remove(&mut self, flag: Flag) {
        self.0 &= !Self::bit(flag);
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for flag in iter {
            set.insert(flag);
        }

        set
    }
}

impl From<Flag> for FlagSet {
    fn from(flag: Flag) -> Self {
        Self::of(&[flag])
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

///
/// TESTS
///
