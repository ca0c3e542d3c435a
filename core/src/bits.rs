use crate::{
    error::{CodecError, Result},
    scalar::{FromBits, Scalar, ToBits, UnsignedInteger, scalar_bits},
};

/// Writes the `W` bits of `value` into `window`, LSB first.
#[inline(always)]
pub(crate) fn write_bits<T: Scalar>(value: T, window: &mut [u8]) {
    debug_assert_eq!(window.len(), scalar_bits::<T>());
    debug_assert!(window.len() <= T::Unsigned::BITS as usize);
    let unsigned: T::Unsigned = value.to_unsigned();
    window
        .iter_mut()
        .enumerate()
        .for_each(|(j, b)| *b = unsigned.bit(j));
}

/// Rebuilds a `T` from the `W` bits of `window`.
#[inline(always)]
pub(crate) fn read_bits<T: Scalar>(window: &[u8]) -> T {
    debug_assert_eq!(window.len(), scalar_bits::<T>());
    debug_assert!(window.len() <= T::Unsigned::BITS as usize);
    T::from_unsigned(T::Unsigned::from_bits(window))
}

fn check_width<T: Scalar>(got: usize) -> Result<usize> {
    let width: usize = scalar_bits::<T>();
    if got < width {
        tracing::debug!(expected = width, got, "bit sequence shorter than scalar width");
        return Err(CodecError::ShortBitSequence {
            expected: width,
            got,
        });
    }
    Ok(width)
}

/// Encodes `value` into the first `W` entries of `out`.
///
/// Bit `j` of the output is bit `j` of the unsigned reinterpretation of
/// `value`. Entries of `out` past `W` are left untouched.
pub fn encode_into<T: Scalar>(value: T, out: &mut [u8]) -> Result<()> {
    let width: usize = check_width::<T>(out.len())?;
    write_bits(value, &mut out[..width]);
    Ok(())
}

/// Decodes a `T` from the first `W` entries of `bits`.
pub fn decode_from<T: Scalar>(bits: &[u8]) -> Result<T> {
    let width: usize = check_width::<T>(bits.len())?;
    Ok(read_bits(&bits[..width]))
}

/// Returns the `W` bits of `value`.
pub fn encode<T: Scalar>(value: T) -> Vec<u8> {
    let mut out: Vec<u8> = vec![0u8; scalar_bits::<T>()];
    write_bits(value, &mut out);
    out
}
