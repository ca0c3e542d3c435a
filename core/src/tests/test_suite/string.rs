use sampling::source::Source;

use crate::{BitInfos, CodecError, EncodedBasicString, TextUnit, scalar_bits};

pub fn test_string_round_trip<C: TextUnit>() {
    let mut source: Source = Source::new([9u8; 32]);
    for length in [0, 1, 5, 31, 128] {
        let have: String = source.next_ascii(length);
        let encoded: EncodedBasicString<Vec<u8>, C> = EncodedBasicString::from_plaintext(&have);
        assert_eq!(encoded.length(), length);
        assert_eq!(encoded.bit_width(), length * scalar_bits::<C>());
        assert_eq!(encoded.decode().unwrap(), have);
    }

    for have in ["", "Hi", "héllo wörld", "日本語", "emoji 🦀 crab"] {
        let encoded: EncodedBasicString<Vec<u8>, C> = EncodedBasicString::from_plaintext(have);
        assert_eq!(encoded.length(), C::units_of(have).len());
        assert_eq!(encoded.elem_width(), scalar_bits::<C>());
        assert_eq!(encoded.decode().unwrap(), have);
    }
}

pub fn test_string_filled_by_engine<C: TextUnit>() {
    let text: &str = "bit by bit";
    let units: Vec<C> = C::units_of(text);
    let input: EncodedBasicString<Vec<u8>, C> = EncodedBasicString::from_plaintext(text);
    let mut output: EncodedBasicString<Vec<u8>, C> = EncodedBasicString::alloc(input.length());
    assert_eq!(output.decode_units(), vec![C::default(); units.len()]);

    // Copies each element independently, window by window.
    for i in 0..input.length() {
        let src = input.at(i).unwrap();
        let mut dst = output.at_mut(i).unwrap();
        dst.bits_mut().copy_from_slice(src.bits());
    }
    assert_eq!(output.decode_units(), units);
    assert_eq!(output.decode().unwrap(), text);
    assert_eq!(output.bits(), input.bits());
}

pub fn test_string_errors<C: TextUnit>() {
    let mut encoded: EncodedBasicString<Vec<u8>, C> = EncodedBasicString::alloc(5);
    assert_eq!(
        encoded.encode("abc"),
        Err(CodecError::LengthMismatch { expected: 5, got: 3 })
    );
    encoded.encode("abcde").unwrap();
    assert_eq!(encoded.decode().unwrap(), "abcde");
    assert_eq!(
        encoded.at(5).unwrap_err(),
        CodecError::IndexOutOfRange { index: 5, length: 5 }
    );
}
