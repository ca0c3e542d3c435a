use std::marker::PhantomData;

use crate::{
    bits::{read_bits, write_bits},
    error::{CodecError, Result},
    layouts::{BitInfos, Data, DataMut, DataRef, ToOwnedDeep},
    scalar::{Scalar, scalar_bits},
};

/// The `W` bits of a single [Scalar].
///
/// With `D = Vec<u8>` the value owns its bits. With `D = &[u8]` or
/// `D = &mut [u8]` it is a view over one window of a larger buffer, which is
/// how [crate::EncodedArray] hands out per-element access.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct EncodedValue<D: Data, T: Scalar> {
    pub(crate) data: D,
    pub(crate) _phantom: PhantomData<T>,
}

pub type EncodedBool = EncodedValue<Vec<u8>, bool>;
pub type EncodedChar = EncodedValue<Vec<u8>, u8>;
pub type EncodedShort = EncodedValue<Vec<u8>, i16>;
pub type EncodedInt = EncodedValue<Vec<u8>, i32>;
pub type EncodedLong = EncodedValue<Vec<u8>, i64>;

impl<T: Scalar> EncodedValue<Vec<u8>, T> {
    /// Allocates `W` zeroed bits.
    pub fn alloc() -> Self {
        Self {
            data: vec![0u8; scalar_bits::<T>()],
            _phantom: PhantomData,
        }
    }

    pub fn from_plaintext(value: T) -> Self {
        let mut encoded: Self = Self::alloc();
        encoded.encode(value);
        encoded
    }
}

impl<T: Scalar> Default for EncodedValue<Vec<u8>, T> {
    fn default() -> Self {
        Self::alloc()
    }
}

impl<T: Scalar> From<T> for EncodedValue<Vec<u8>, T> {
    fn from(value: T) -> Self {
        Self::from_plaintext(value)
    }
}

impl<D: DataRef, T: Scalar> EncodedValue<D, T> {
    /// Wraps a container holding exactly `W` bits.
    pub fn from_data(data: D) -> Result<Self> {
        let width: usize = scalar_bits::<T>();
        let got: usize = data.as_ref().len();
        if got < width {
            return Err(CodecError::ShortBitSequence { expected: width, got });
        }
        if got > width {
            return Err(CodecError::LengthMismatch { expected: width, got });
        }
        Ok(Self {
            data,
            _phantom: PhantomData,
        })
    }

    pub fn decode(&self) -> T {
        read_bits(self.data.as_ref())
    }

    pub fn bits(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Returns bit `j`, LSB first.
    pub fn bit(&self, j: usize) -> Result<bool> {
        self.bits()
            .get(j)
            .map(|b| *b != 0)
            .ok_or(CodecError::IndexOutOfRange {
                index: j,
                length: self.width(),
            })
    }

    pub fn width(&self) -> usize {
        scalar_bits::<T>()
    }

    pub fn to_ref(&self) -> EncodedValue<&[u8], T> {
        EncodedValue {
            data: self.data.as_ref(),
            _phantom: PhantomData,
        }
    }
}

impl<D: Data, T: Scalar> EncodedValue<D, T> {
    pub fn into_data(self) -> D {
        self.data
    }
}

impl<D: DataMut, T: Scalar> EncodedValue<D, T> {
    /// Re-encodes the receiver with `value`.
    pub fn encode(&mut self, value: T) {
        write_bits(value, self.data.as_mut())
    }

    pub fn bits_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }

    /// Sets bit `j`, LSB first.
    pub fn set_bit(&mut self, j: usize, bit: bool) -> Result<()> {
        let width: usize = self.width();
        match self.bits_mut().get_mut(j) {
            Some(b) => {
                *b = bit as u8;
                Ok(())
            }
            None => Err(CodecError::IndexOutOfRange {
                index: j,
                length: width,
            }),
        }
    }

    pub fn to_mut(&mut self) -> EncodedValue<&mut [u8], T> {
        EncodedValue {
            data: self.data.as_mut(),
            _phantom: PhantomData,
        }
    }
}

impl<D: DataRef, T: Scalar> ToOwnedDeep for EncodedValue<D, T> {
    type Owned = EncodedValue<Vec<u8>, T>;
    fn to_owned_deep(&self) -> Self::Owned {
        EncodedValue {
            data: self.data.as_ref().to_vec(),
            _phantom: PhantomData,
        }
    }
}

impl<D: Data, T: Scalar> BitInfos for EncodedValue<D, T> {
    fn length(&self) -> usize {
        1
    }

    fn elem_width(&self) -> usize {
        scalar_bits::<T>()
    }
}
