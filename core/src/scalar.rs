use std::fmt::Debug;

/// Read access to the `i`-th bit (LSB first) of an unsigned integer.
pub trait ToBits {
    fn bit(&self, i: usize) -> u8;
}

macro_rules! impl_tobits {
    ($($t:ty),*) => {
        $(
            impl ToBits for $t {
                #[inline(always)]
                fn bit(&self, i: usize) -> u8 {
                    if i >= (std::mem::size_of::<$t>() * 8) {
                        panic!("bit index {} out of range for {}", i, stringify!($t));
                    }
                    ((self >> i) & 1) as u8
                }
            }
        )*
    };
}

impl_tobits!(u8, u16, u32, u64, u128, usize);

/// Reconstruction of an unsigned integer from its bits (LSB first).
///
/// Any non-zero entry reads as a 1. Entries past the width of the
/// integer are ignored.
pub trait FromBits: Sized {
    fn from_bits(bits: &[u8]) -> Self;
}

macro_rules! impl_from_bits {
    ($($t:ty),*) => {
        $(
            impl FromBits for $t {
                fn from_bits(bits: &[u8]) -> Self {
                    let mut value: $t = 0;
                    let max_bits = std::mem::size_of::<$t>() * 8;
                    let n = bits.len().min(max_bits);

                    for (i, &bit) in bits.iter().take(n).enumerate() {
                        if bit != 0 {
                            value |= 1 << i;
                        }
                    }
                    value
                }
            }
        )*
    };
}

impl_from_bits!(u8, u16, u32, u64, u128, usize);

/// Unsigned integers a [Scalar] is reinterpreted into before being split
/// into bits.
pub trait UnsignedInteger: Copy + Default + Eq + Debug + ToBits + FromBits + 'static {
    const BITS: u32;
}

macro_rules! impl_unsigned_integer {
    ($($t:ty),*) => {
        $(
            impl UnsignedInteger for $t {
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_unsigned_integer!(u8, u16, u32, u64, u128, usize);

/// Number of bits a scalar type occupies once encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarWidth {
    /// One-bit scalar (`bool`): encoding and decoding are the identity.
    Bit,
    /// Multi-bit scalar of `8 * size_of::<T>()` bits.
    Word(usize),
}

impl ScalarWidth {
    pub const fn of_bytes(bytes: usize) -> Self {
        ScalarWidth::Word(bytes << 3)
    }

    pub const fn bits(self) -> usize {
        match self {
            ScalarWidth::Bit => 1,
            ScalarWidth::Word(bits) => bits,
        }
    }
}

/// A fixed-width native value that can be laid out as bits.
///
/// The encoding is a two-step contract: [Scalar::to_unsigned] reinterprets
/// the in-memory representation of the value as an unsigned integer of the
/// same width (no arithmetic conversion), whose bits are then emitted LSB
/// first. Decoding rebuilds the unsigned integer and reinterprets it back with
/// [Scalar::from_unsigned], so signed values keep their exact bit pattern.
pub trait Scalar: Copy + Default + Eq + Debug + 'static {
    type Unsigned: UnsignedInteger;
    const WIDTH: ScalarWidth;

    fn to_unsigned(self) -> Self::Unsigned;
    fn from_unsigned(bits: Self::Unsigned) -> Self;
}

impl Scalar for bool {
    type Unsigned = u8;
    const WIDTH: ScalarWidth = ScalarWidth::Bit;

    #[inline(always)]
    fn to_unsigned(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    fn from_unsigned(bits: u8) -> Self {
        bits & 1 == 1
    }
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Unsigned = $t;
                const WIDTH: ScalarWidth = ScalarWidth::of_bytes(std::mem::size_of::<$t>());

                #[inline(always)]
                fn to_unsigned(self) -> $t {
                    self
                }

                #[inline(always)]
                fn from_unsigned(bits: $t) -> Self {
                    bits
                }
            }
        )*
    };
}

impl_scalar_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_scalar_signed {
    ($($t:ty => $u:ty),*) => {
        $(
            impl Scalar for $t {
                type Unsigned = $u;
                const WIDTH: ScalarWidth = ScalarWidth::of_bytes(std::mem::size_of::<$t>());

                #[inline(always)]
                fn to_unsigned(self) -> $u {
                    <$u>::from_ne_bytes(self.to_ne_bytes())
                }

                #[inline(always)]
                fn from_unsigned(bits: $u) -> Self {
                    <$t>::from_ne_bytes(bits.to_ne_bytes())
                }
            }
        )*
    };
}

impl_scalar_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

/// Encoded width `W` of `T`.
#[inline(always)]
pub const fn scalar_bits<T: Scalar>() -> usize {
    T::WIDTH.bits()
}
