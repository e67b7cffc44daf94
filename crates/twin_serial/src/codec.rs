//! Scalar codecs.
//!
//! Leaf values are converted to and from [`Scalar`] through [`ScalarCodec`].
//! Integer decoders accept either integer class as long as the value fits,
//! so a document produced by a backend that does not keep the sign class
//! still reads back.

use alloc::string::{String, ToString};
use core::fmt::Display;

use twin_doc::Scalar;

// -----------------------------------------------------------------------------
// ScalarCodec

/// A type stored as a single [`Scalar`].
pub trait ScalarCodec: Sized {
    fn encode(&self) -> Scalar;

    /// Returns `None` if `scalar` cannot represent a `Self`.
    fn decode(scalar: &Scalar) -> Option<Self>;
}

impl ScalarCodec for bool {
    #[inline]
    fn encode(&self) -> Scalar {
        Scalar::Bool(*self)
    }

    #[inline]
    fn decode(scalar: &Scalar) -> Option<Self> {
        scalar.as_bool()
    }
}

impl ScalarCodec for String {
    #[inline]
    fn encode(&self) -> Scalar {
        Scalar::Str(self.clone())
    }

    #[inline]
    fn decode(scalar: &Scalar) -> Option<Self> {
        scalar.as_str().map(ToString::to_string)
    }
}

impl ScalarCodec for f64 {
    #[inline]
    fn encode(&self) -> Scalar {
        Scalar::Float(*self)
    }

    #[inline]
    fn decode(scalar: &Scalar) -> Option<Self> {
        scalar.as_f64()
    }
}

impl ScalarCodec for f32 {
    #[inline]
    fn encode(&self) -> Scalar {
        Scalar::Float(f64::from(*self))
    }

    #[inline]
    fn decode(scalar: &Scalar) -> Option<Self> {
        scalar.as_f64().and_then(|value| {
            // `as` would saturate to infinity.
            let range = f64::from(f32::MIN)..=f64::from(f32::MAX);
            (!value.is_finite() || range.contains(&value)).then_some(value as f32)
        })
    }
}

macro_rules! impl_integer_codec {
    ($variant:ident, $wide:ty, $as:ident: $($ty:ty),+) => {
        $(
            impl ScalarCodec for $ty {
                #[inline]
                fn encode(&self) -> Scalar {
                    Scalar::$variant(<$wide>::from(*self))
                }

                #[inline]
                fn decode(scalar: &Scalar) -> Option<Self> {
                    scalar.$as().and_then(|value| <$ty>::try_from(value).ok())
                }
            }
        )+
    };
}

impl_integer_codec!(Int, i64, as_i64: i8, i16, i32, i64);
impl_integer_codec!(UInt, u64, as_u64: u8, u16, u32, u64);

// -----------------------------------------------------------------------------
// MapKey

/// A scalar type usable as the key of a serialized map.
///
/// Keys are written into the `MAP_KEY` field of each entry object.
pub trait MapKey: ScalarCodec + Default + Clone + Eq + Display {}

impl MapKey for String {}
impl MapKey for i32 {}
impl MapKey for i64 {}
impl MapKey for u32 {}
