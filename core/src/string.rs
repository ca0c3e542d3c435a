use crate::{
    array::EncodedArray,
    error::{CodecError, Result},
    layouts::{BitInfos, Data, DataMut, DataRef, ToOwnedDeep},
    scalar::{Scalar, scalar_bits},
    value::EncodedValue,
};

/// Code unit a text is split into before encoding.
pub trait TextUnit: Scalar {
    /// Name of the text encoding, reported by [CodecError::InvalidText].
    const ENCODING: &'static str;

    fn units_of(text: &str) -> Vec<Self>;
    fn text_of(units: &[Self]) -> Result<String>;
}

impl TextUnit for u8 {
    const ENCODING: &'static str = "UTF-8";

    fn units_of(text: &str) -> Vec<Self> {
        text.as_bytes().to_vec()
    }

    fn text_of(units: &[Self]) -> Result<String> {
        String::from_utf8(units.to_vec()).map_err(|_| CodecError::InvalidText {
            encoding: Self::ENCODING,
        })
    }
}

impl TextUnit for u16 {
    const ENCODING: &'static str = "UTF-16";

    fn units_of(text: &str) -> Vec<Self> {
        text.encode_utf16().collect()
    }

    fn text_of(units: &[Self]) -> Result<String> {
        String::from_utf16(units).map_err(|_| CodecError::InvalidText {
            encoding: Self::ENCODING,
        })
    }
}

/// A text encoded as an [EncodedArray] of its code units.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct EncodedBasicString<D: Data, C: TextUnit> {
    pub(crate) array: EncodedArray<D, C>,
}

/// Text encoded as UTF-8 code units, 8 bits per unit.
pub type EncodedString = EncodedBasicString<Vec<u8>, u8>;

/// Text encoded as UTF-16 code units, 16 bits per unit.
pub type EncodedWideString = EncodedBasicString<Vec<u8>, u16>;

impl<C: TextUnit> EncodedBasicString<Vec<u8>, C> {
    /// Allocates room for `length` zeroed code units.
    ///
    /// # Panics
    ///
    /// Panics if `length * W` overflows `usize`.
    pub fn alloc(length: usize) -> Self {
        Self {
            array: EncodedArray::alloc(length),
        }
    }

    pub fn try_alloc(length: usize) -> Result<Self> {
        Ok(Self {
            array: EncodedArray::try_alloc(length)?,
        })
    }

    /// Encodes `text`; the length is its number of code units.
    pub fn from_plaintext(text: &str) -> Self {
        Self {
            array: EncodedArray::from_plaintext(&C::units_of(text)),
        }
    }
}

impl<C: TextUnit> From<&str> for EncodedBasicString<Vec<u8>, C> {
    fn from(text: &str) -> Self {
        Self::from_plaintext(text)
    }
}

impl<D: Data, C: TextUnit> From<EncodedArray<D, C>> for EncodedBasicString<D, C> {
    fn from(array: EncodedArray<D, C>) -> Self {
        Self { array }
    }
}

impl<D: Data, C: TextUnit> EncodedBasicString<D, C> {
    pub fn array(&self) -> &EncodedArray<D, C> {
        &self.array
    }

    pub fn into_array(self) -> EncodedArray<D, C> {
        self.array
    }

    pub fn length(&self) -> usize {
        self.array.length()
    }

    pub fn size(&self) -> usize {
        self.array.size()
    }

    pub fn bit_width(&self) -> usize {
        self.array.bit_width()
    }
}

impl<D: DataRef, C: TextUnit> EncodedBasicString<D, C> {
    /// Decodes every code unit and assembles them, in order, into a text.
    pub fn decode(&self) -> Result<String> {
        C::text_of(&self.array.decode())
    }

    pub fn decode_units(&self) -> Vec<C> {
        self.array.decode()
    }

    pub fn at(&self, i: usize) -> Result<EncodedValue<&[u8], C>> {
        self.array.at(i)
    }

    pub fn bits(&self) -> &[u8] {
        self.array.bits()
    }
}

impl<D: DataMut, C: TextUnit> EncodedBasicString<D, C> {
    /// Re-encodes the receiver with `text`, which must have exactly
    /// [EncodedBasicString::length] code units.
    pub fn encode(&mut self, text: &str) -> Result<()> {
        self.array.encode(&C::units_of(text))
    }

    pub fn array_mut(&mut self) -> &mut EncodedArray<D, C> {
        &mut self.array
    }

    pub fn at_mut(&mut self, i: usize) -> Result<EncodedValue<&mut [u8], C>> {
        self.array.at_mut(i)
    }

    pub fn bits_mut(&mut self) -> &mut [u8] {
        self.array.bits_mut()
    }
}

impl<D: Data, C: TextUnit> BitInfos for EncodedBasicString<D, C> {
    fn length(&self) -> usize {
        self.array.length()
    }

    fn elem_width(&self) -> usize {
        scalar_bits::<C>()
    }
}

impl<D: DataRef, C: TextUnit> ToOwnedDeep for EncodedBasicString<D, C> {
    type Owned = EncodedBasicString<Vec<u8>, C>;
    fn to_owned_deep(&self) -> Self::Owned {
        EncodedBasicString {
            array: self.array.to_owned_deep(),
        }
    }
}
