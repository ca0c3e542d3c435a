use std::marker::PhantomData;

use itertools::{Itertools, izip};

use crate::{
    bits::{read_bits, write_bits},
    error::{CodecError, Result},
    layouts::{BitInfos, Data, DataMut, DataRef, ToOwnedDeep},
    scalar::{Scalar, scalar_bits},
    value::EncodedValue,
};

/// A fixed-length array of [Scalar] encoded as a flat bit sequence.
///
/// The sequence holds `length * W` bits. Element `i` occupies the window
/// `[i * W, (i + 1) * W)`; windows are contiguous, disjoint and follow the
/// element order.
///
/// # Example
///
/// Given `[a, b, c]` of type `i16`, the memory layout is
/// `[a0..a15, b0..b15, c0..c15]` where `x0` is the least significant bit
/// of `x`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct EncodedArray<D: Data, T: Scalar> {
    pub(crate) data: D,
    pub(crate) length: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: Scalar> EncodedArray<Vec<u8>, T> {
    /// Number of bits needed for `length` elements, or `None` if it does
    /// not fit in a `usize`.
    pub fn bits_of(length: usize) -> Option<usize> {
        length.checked_mul(scalar_bits::<T>())
    }

    fn checked_bits_of(length: usize) -> Result<usize> {
        Self::bits_of(length).ok_or_else(|| {
            tracing::debug!(length, "encoded array bit width overflows usize");
            CodecError::LengthMismatch {
                expected: usize::MAX / scalar_bits::<T>(),
                got: length,
            }
        })
    }

    /// Allocates `length * W` zeroed bits, e.g. as the destination of a
    /// computation that fills them one at a time.
    ///
    /// # Panics
    ///
    /// Panics if `length * W` overflows `usize`. Use
    /// [EncodedArray::try_alloc] to get an error instead.
    pub fn alloc(length: usize) -> Self {
        match Self::try_alloc(length) {
            Ok(array) => array,
            Err(err) => panic!("cannot allocate encoded array: {err}"),
        }
    }

    /// Same as [EncodedArray::alloc], but fails with
    /// [CodecError::LengthMismatch] when `length * W` overflows `usize`.
    pub fn try_alloc(length: usize) -> Result<Self> {
        Ok(Self {
            data: vec![0u8; Self::checked_bits_of(length)?],
            length,
            _phantom: PhantomData,
        })
    }

    pub fn alloc_from_infos<A>(infos: &A) -> Result<Self>
    where
        A: BitInfos,
    {
        let width: usize = scalar_bits::<T>();
        if infos.elem_width() != width {
            return Err(CodecError::WidthMismatch {
                expected: width,
                got: infos.elem_width(),
            });
        }
        Self::try_alloc(infos.length())
    }

    pub fn from_plaintext(values: &[T]) -> Self {
        let mut array: Self = Self::alloc(values.len());
        array.write_all(values);
        array
    }

    /// Wraps a flat bit buffer, e.g. one returned by an external engine.
    pub fn from_bits(length: usize, bits: impl Into<Vec<u8>>) -> Result<Self> {
        let data: Vec<u8> = bits.into();
        let expected: usize = Self::checked_bits_of(length)?;
        if data.len() < expected {
            return Err(CodecError::ShortBitSequence {
                expected,
                got: data.len(),
            });
        }
        if data.len() != expected {
            return Err(CodecError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            length,
            _phantom: PhantomData,
        })
    }
}

impl<T: Scalar> From<&[T]> for EncodedArray<Vec<u8>, T> {
    fn from(values: &[T]) -> Self {
        Self::from_plaintext(values)
    }
}

impl<D: Data, T: Scalar> EncodedArray<D, T> {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn size(&self) -> usize {
        self.length
    }

    /// Total number of bits: `length * W`.
    ///
    /// Every constructor checks that this product fits in a `usize`.
    pub fn bit_width(&self) -> usize {
        self.length * scalar_bits::<T>()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn into_data(self) -> D {
        self.data
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.length {
            tracing::debug!(index = i, length = self.length, "element view out of range");
            return Err(CodecError::IndexOutOfRange {
                index: i,
                length: self.length,
            });
        }
        Ok(())
    }
}

impl<D: Data, T: Scalar> BitInfos for EncodedArray<D, T> {
    fn length(&self) -> usize {
        self.length
    }

    fn elem_width(&self) -> usize {
        scalar_bits::<T>()
    }
}

impl<D: DataRef, T: Scalar> EncodedArray<D, T> {
    /// Decodes every window, in window order.
    pub fn decode(&self) -> Vec<T> {
        tracing::trace!(length = self.length, bit_width = self.bit_width(), "decoding array");
        self.data
            .as_ref()
            .chunks_exact(scalar_bits::<T>())
            .map(read_bits::<T>)
            .collect_vec()
    }

    /// Read-only view over the bits of element `i`.
    pub fn at(&self, i: usize) -> Result<EncodedValue<&[u8], T>> {
        self.check_index(i)?;
        Ok(EncodedValue {
            data: &self.data.as_ref()[self.window(i)],
            _phantom: PhantomData,
        })
    }

    pub fn element_view(&self, i: usize) -> Result<EncodedValue<&[u8], T>> {
        self.at(i)
    }

    /// Views over every element, in order.
    pub fn windows(&self) -> impl Iterator<Item = EncodedValue<&[u8], T>> {
        self.data
            .as_ref()
            .chunks_exact(scalar_bits::<T>())
            .map(|data| EncodedValue {
                data,
                _phantom: PhantomData,
            })
    }

    /// The whole flat bit sequence.
    pub fn bits(&self) -> &[u8] {
        self.data.as_ref()
    }

    pub fn to_ref(&self) -> EncodedArray<&[u8], T> {
        EncodedArray {
            data: self.data.as_ref(),
            length: self.length,
            _phantom: PhantomData,
        }
    }
}

impl<D: DataMut, T: Scalar> EncodedArray<D, T> {
    /// Re-encodes the receiver with `values`.
    ///
    /// Fails with [CodecError::LengthMismatch] if `values.len()` differs from
    /// the configured length, in which case the receiver is left unchanged.
    pub fn encode(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.length {
            tracing::debug!(
                expected = self.length,
                got = values.len(),
                "plaintext length does not match encoded array"
            );
            return Err(CodecError::LengthMismatch {
                expected: self.length,
                got: values.len(),
            });
        }
        self.write_all(values);
        Ok(())
    }

    fn write_all(&mut self, values: &[T]) {
        tracing::trace!(length = self.length, bit_width = self.bit_width(), "encoding array");
        izip!(
            self.data.as_mut().chunks_exact_mut(scalar_bits::<T>()),
            values.iter()
        )
        .for_each(|(window, value)| write_bits(*value, window));
    }

    /// Mutable view over the bits of element `i`.
    ///
    /// Writes through the view never reach outside the window of element `i`.
    pub fn at_mut(&mut self, i: usize) -> Result<EncodedValue<&mut [u8], T>> {
        self.check_index(i)?;
        let range = self.window(i);
        Ok(EncodedValue {
            data: &mut self.data.as_mut()[range],
            _phantom: PhantomData,
        })
    }

    pub fn element_view_mut(&mut self, i: usize) -> Result<EncodedValue<&mut [u8], T>> {
        self.at_mut(i)
    }

    /// Mutable views over every element, in order.
    ///
    /// The views are disjoint, so they can be handed to independent workers.
    pub fn windows_mut(&mut self) -> impl Iterator<Item = EncodedValue<&mut [u8], T>> {
        self.data
            .as_mut()
            .chunks_exact_mut(scalar_bits::<T>())
            .map(|data| EncodedValue {
                data,
                _phantom: PhantomData,
            })
    }

    pub fn bits_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }

    pub fn zero(&mut self) {
        self.data.as_mut().fill(0)
    }

    pub fn to_mut(&mut self) -> EncodedArray<&mut [u8], T> {
        EncodedArray {
            data: self.data.as_mut(),
            length: self.length,
            _phantom: PhantomData,
        }
    }
}

impl<D: DataRef, T: Scalar> ToOwnedDeep for EncodedArray<D, T> {
    type Owned = EncodedArray<Vec<u8>, T>;
    fn to_owned_deep(&self) -> Self::Owned {
        EncodedArray {
            data: self.data.as_ref().to_vec(),
            length: self.length,
            _phantom: PhantomData,
        }
    }
}
