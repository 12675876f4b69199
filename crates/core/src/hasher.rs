use std::{
    fmt::Debug,
    hash::{DefaultHasher, Hash, Hasher},
};

use crate::error::{RingError, RingResult};

/// Derives the ordering key of a value.
///
/// Implementations must be deterministic. Two values with the same key are
/// the same ring position, so a hasher that is not injective over the stored
/// values makes the second value unreachable (it is dropped on insert).
pub trait KeyHasher<V: ?Sized> {
    type Key: Ord + Clone + Debug;

    fn key_of(&self, value: &V) -> RingResult<Self::Key>;
}

/// `DefaultHasher` based keys, optionally salted with a seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdKeyHasher {
    seed: u64,
}

impl StdKeyHasher {
    #[inline]
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<V: Hash + ?Sized> KeyHasher<V> for StdKeyHasher {
    type Key = u64;

    #[inline]
    fn key_of(&self, value: &V) -> RingResult<u64> {
        let mut h = DefaultHasher::new();
        self.seed.hash(&mut h);
        value.hash(&mut h);
        Ok(h.finish())
    }
}

/// Uses the number itself as its key, so ring order is numeric order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityHasher;

macro_rules! identity_lossless {
    ($($t:ty),*) => {
        $(
            impl KeyHasher<$t> for IdentityHasher {
                type Key = i64;

                #[inline]
                fn key_of(&self, value: &$t) -> RingResult<i64> {
                    Ok(i64::from(*value))
                }
            }
        )*
    };
}

macro_rules! identity_checked {
    ($($t:ty),*) => {
        $(
            impl KeyHasher<$t> for IdentityHasher {
                type Key = i64;

                fn key_of(&self, value: &$t) -> RingResult<i64> {
                    i64::try_from(*value).map_err(|_| {
                        RingError::UnhashableValue(format!("{value} does not fit in an i64 key"))
                    })
                }
            }
        )*
    };
}

identity_lossless!(i8, i16, i32, i64, u8, u16, u32);
identity_checked!(isize, usize, u64, i128, u128);

impl KeyHasher<f64> for IdentityHasher {
    type Key = i64;

    fn key_of(&self, value: &f64) -> RingResult<i64> {
        if value.is_nan() {
            return Err(RingError::UnhashableValue("NaN has no ring position".into()));
        }

        // Mismo orden que f64::total_cmp
        let bits = value.to_bits() as i64;
        Ok(bits ^ ((((bits >> 63) as u64) >> 1) as i64))
    }
}

impl KeyHasher<f32> for IdentityHasher {
    type Key = i64;

    fn key_of(&self, value: &f32) -> RingResult<i64> {
        <Self as KeyHasher<f64>>::key_of(self, &f64::from(*value))
    }
}
