use std::ops::Range;

use crate::scalar::{Scalar, scalar_bits};

/// Bound on the bit containers backing every encoded layout.
///
/// Layouts are generic over the container so the same type can own its bits
/// (`Vec<u8>`) or borrow them (`&[u8]`, `&mut [u8]`). Each byte holds one bit.
pub trait Data: PartialEq + Eq + Sized {}
impl<T: PartialEq + Eq + Sized> Data for T {}

pub trait DataRef: Data + AsRef<[u8]> {}
impl<T: Data + AsRef<[u8]>> DataRef for T {}

pub trait DataMut: DataRef + AsMut<[u8]> {}
impl<T: DataRef + AsMut<[u8]>> DataMut for T {}

pub trait ToOwnedDeep {
    type Owned;
    fn to_owned_deep(&self) -> Self::Owned;
}

/// Shape of a bit sequence partitioned into equally sized windows.
pub trait BitInfos {
    /// Number of encoded elements.
    fn length(&self) -> usize;

    /// Width `W` in bits of a single element.
    fn elem_width(&self) -> usize;

    /// Total number of bits: `length * W`.
    fn bit_width(&self) -> usize {
        self.length() * self.elem_width()
    }

    /// Bit range `[i * W, (i + 1) * W)` of the `i`-th window.
    ///
    /// Does not check `i` against [BitInfos::length].
    fn window(&self, i: usize) -> Range<usize> {
        let w: usize = self.elem_width();
        i * w..(i + 1) * w
    }
}

/// Partitioning metadata shared with the engine that fills or consumes an
/// encoded array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodedArrayLayout {
    pub length: usize,
    pub elem_width: usize,
}

impl EncodedArrayLayout {
    pub fn of<T: Scalar>(length: usize) -> Self {
        Self {
            length,
            elem_width: scalar_bits::<T>(),
        }
    }
}

impl BitInfos for EncodedArrayLayout {
    fn length(&self) -> usize {
        self.length
    }

    fn elem_width(&self) -> usize {
        self.elem_width
    }
}
