//! Flag enums and bitmask-backed flag sets.
//!
//! A flag set packs a subset of an enum's variants into a single `i64`,
//! where each variant owns the bit at its declaration position. The empty
//! set is `0`, and enums wider than 64 variants are rejected. [`encode`]
//! and [`decode`] are inverses for every subset, with [`decode`] ignoring
//! mask bits that name no variant.

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use strum::VariantArray;

/// Fieldless enum usable as a flag in a [`FlagSet`].
///
/// Blanket-implemented for every `Copy` enum that derives
/// `strum_macros::VariantArray`. A flag's bit is its position in
/// [`VariantArray::VARIANTS`].
pub trait Flag: VariantArray + Copy + Eq + fmt::Debug + 'static {}

impl<E> Flag for E where E: VariantArray + Copy + Eq + fmt::Debug + 'static {}

/// Returns `flag`'s position within its enum's declaration order.
#[must_use]
pub fn ordinal<E: Flag>(flag: E) -> usize {
    E::VARIANTS
        .iter()
        .position(|variant| *variant == flag)
        .expect("flag missing from VariantArray::VARIANTS")
}

/// Encodes a collection of flags into its bitmask form.
///
/// The empty collection encodes to `0`.
///
/// # Panics
///
/// Panics when a flag sits at declaration position 64 or above.
pub fn encode<E: Flag>(flags: impl IntoIterator<Item = E>) -> i64 {
    flags.into_iter().fold(0, |mask, flag| mask | bit_of(flag))
}

/// Decodes a bitmask into the set of flags it names.
///
/// Bits without a matching variant are ignored, so stray high bits in
/// stored masks never surface as phantom flags. `0` decodes to the empty
/// set.
#[must_use]
pub fn decode<E: Flag>(mask: i64) -> FlagSet<E> {
    FlagSet::from_mask(mask)
}

fn bit_of<E: Flag>(flag: E) -> i64 {
    let position = ordinal(flag);
    assert!(
        position < 64,
        "flag enums are limited to 64 variants, {flag:?} sits at position {position}"
    );
    1 << position
}

fn full_mask<E: Flag>() -> i64 {
    let variants = E::VARIANTS.len();
    assert!(
        variants <= 64,
        "flag enums are limited to 64 variants, {} has {variants}",
        std::any::type_name::<E>()
    );
    if variants == 64 {
        -1
    } else {
        ((1u64 << variants) - 1) as i64
    }
}

/// Set of enum flags stored as a single `i64` bitmask.
///
/// The set is `Copy` and order-free: two sets are equal exactly when their
/// masks are equal. Iteration yields flags in declaration order.
pub struct FlagSet<E> {
    mask: i64,
    _marker: PhantomData<E>,
}

impl<E: Flag> FlagSet<E> {
    /// Creates an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::raw(0)
    }

    /// Creates the set containing every variant of `E`.
    #[must_use]
    pub fn all() -> Self {
        Self::raw(full_mask::<E>())
    }

    /// Creates a set from the given flags.
    #[must_use]
    pub fn of(flags: impl IntoIterator<Item = E>) -> Self {
        flags.into_iter().collect()
    }

    /// Rebuilds a set from its bitmask form, ignoring bits that name no
    /// variant.
    #[must_use]
    pub fn from_mask(mask: i64) -> Self {
        Self::raw(mask & full_mask::<E>())
    }

    /// Returns the bitmask form of the set.
    #[must_use]
    pub fn mask(self) -> i64 {
        self.mask
    }

    /// Returns true when `flag` is in the set.
    #[must_use]
    pub fn contains(self, flag: E) -> bool {
        self.mask & bit_of(flag) != 0
    }

    /// Inserts `flag`, returning true when it was not already present.
    pub fn insert(&mut self, flag: E) -> bool {
        let bit = bit_of(flag);
        let absent = self.mask & bit == 0;
        self.mask |= bit;
        absent
    }

    /// Removes `flag`, returning true when it was present.
    pub fn remove(&mut self, flag: E) -> bool {
        let bit = bit_of(flag);
        let present = self.mask & bit != 0;
        self.mask &= !bit;
        present
    }

    /// Returns the number of flags in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns true when the set holds no flags.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Iterates over the flags in declaration order.
    pub fn iter(self) -> Flags<E> {
        Flags {
            mask: self.mask,
            position: 0,
            _marker: PhantomData,
        }
    }

    fn raw(mask: i64) -> Self {
        Self {
            mask,
            _marker: PhantomData,
        }
    }
}

impl<E> Clone for FlagSet<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FlagSet<E> {}

impl<E> PartialEq for FlagSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
    }
}

impl<E> Eq for FlagSet<E> {}

impl<E> Hash for FlagSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask.hash(state);
    }
}

impl<E> Default for FlagSet<E> {
    fn default() -> Self {
        Self {
            mask: 0,
            _marker: PhantomData,
        }
    }
}

impl<E: Flag> fmt::Debug for FlagSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E: Flag> FromIterator<E> for FlagSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<E: Flag> Extend<E> for FlagSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

impl<E: Flag> IntoIterator for FlagSet<E> {
    type Item = E;
    type IntoIter = Flags<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the flags of a [`FlagSet`], in declaration order.
#[derive(Clone, Debug)]
pub struct Flags<E> {
    mask: i64,
    position: usize,
    _marker: PhantomData<E>,
}

impl<E: Flag> Iterator for Flags<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        while self.position < E::VARIANTS.len() && self.position < 64 {
            let variant = E::VARIANTS[self.position];
            let bit = 1i64 << self.position;
            self.position += 1;
            if self.mask & bit != 0 {
                return Some(variant);
            }
        }
        None
    }
}
