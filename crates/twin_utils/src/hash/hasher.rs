//! Provide `FixedHasher`, a seeded `foldhash` hasher with stable output.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// The seed shared by every [`FixedHashState`].
const FIXED_SEED: FixedState = FixedState::with_seed(0x5EED_7A1C_0DE5_1DE5);

/// Hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A [`BuildHasher`] whose hashes only depend on the hashed value.
///
/// Unlike `RandomState`, two containers filled with the same items iterate
/// in the same order, in the same process or across runs.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use twin_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one(7_u32), FixedHashState.hash_one(7_u32));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_SEED.build_hasher()
    }
}
