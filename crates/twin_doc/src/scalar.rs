use alloc::string::String;
use core::fmt;

/// A leaf value exchanged between the serializer and a document backend.
///
/// Integers keep their sign class so that backends able to distinguish them
/// can do so; decoders in the serializer accept either class when the value
/// fits.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Returns the value as a signed integer, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Scalar::Int(value) => Some(value),
            Scalar::UInt(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    /// Returns the value as an unsigned integer, if it is an integer that fits.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Scalar::Int(value) => u64::try_from(value).ok(),
            Scalar::UInt(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are converted.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::Float(value) => Some(value),
            Scalar::Int(value) => Some(value as f64),
            Scalar::UInt(value) => Some(value as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Scalar::Bool(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::UInt(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Str(value) => write!(f, "{value:?}"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($variant:ident: $($ty:ty),+ => $as:ty) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(value: $ty) -> Self {
                    Scalar::$variant(<$as>::from(value))
                }
            }
        )+
    };
}

impl_from_scalar!(Bool: bool => bool);
impl_from_scalar!(Int: i8, i16, i32, i64 => i64);
impl_from_scalar!(UInt: u8, u16, u32, u64 => u64);
impl_from_scalar!(Float: f32, f64 => f64);
impl_from_scalar!(Str: String, &str => String);
