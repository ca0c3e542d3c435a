use sampling::source::Source;

use crate::{
    BitInfos, CodecError, EncodedValue, ScalarWidth, ToOwnedDeep, decode_from, encode, encode_into,
    scalar::UnsignedInteger, scalar_bits, tests::test_suite::SampleScalar,
};

pub fn test_scalar_width<T: SampleScalar>() {
    let expected: usize = match T::WIDTH {
        ScalarWidth::Bit => 1,
        ScalarWidth::Word(_) => 8 * size_of::<T>(),
    };
    assert_eq!(scalar_bits::<T>(), expected);
    assert!(scalar_bits::<T>() <= T::Unsigned::BITS as usize);

    let mut source: Source = Source::new([0u8; 32]);
    for _ in 0..64 {
        assert_eq!(encode(T::sample(&mut source)).len(), expected);
    }
    for v in T::boundaries() {
        assert_eq!(encode(v).len(), expected);
    }
}

pub fn test_scalar_round_trip<T: SampleScalar>() {
    for have in T::boundaries() {
        let bits: Vec<u8> = encode(have);
        let want: T = decode_from(&bits).unwrap();
        assert_eq!(have, want, "{:?} != {:?}", have, want);
    }

    let mut source: Source = Source::new([1u8; 32]);
    for _ in 0..1024 {
        let have: T = T::sample(&mut source);
        let want: T = decode_from(&encode(have)).unwrap();
        assert_eq!(have, want, "{:?} != {:?}", have, want);
    }
}

/// Checks bit `j` against the unsigned reinterpretation computed
/// independently of the codec.
pub fn test_scalar_lsb_first<T: SampleScalar>()
where
    T::Unsigned: Into<u128>,
{
    let mut source: Source = Source::new([2u8; 32]);
    for _ in 0..256 {
        let v: T = T::sample(&mut source);
        let unsigned: u128 = v.to_unsigned().into();
        let bits: Vec<u8> = encode(v);
        bits.iter()
            .enumerate()
            .for_each(|(j, b)| assert_eq!(*b as u128, (unsigned >> j) & 1, "bit {j} of {v:?}"));
    }
}

pub fn test_scalar_short_bit_sequence<T: SampleScalar>() {
    let width: usize = scalar_bits::<T>();
    let short: Vec<u8> = vec![1u8; width - 1];
    assert_eq!(
        decode_from::<T>(&short),
        Err(CodecError::ShortBitSequence {
            expected: width,
            got: width - 1
        })
    );

    let mut out: Vec<u8> = vec![0u8; width - 1];
    assert_eq!(
        encode_into(T::default(), &mut out),
        Err(CodecError::ShortBitSequence {
            expected: width,
            got: width - 1
        })
    );
    assert!(out.iter().all(|b| *b == 0));
}

pub fn test_encoded_value<T: SampleScalar>() {
    let mut source: Source = Source::new([3u8; 32]);
    let width: usize = scalar_bits::<T>();

    let mut value: EncodedValue<Vec<u8>, T> = EncodedValue::alloc();
    assert_eq!(value.width(), width);
    assert_eq!(value.bit_width(), width);
    assert_eq!(value.decode(), T::default());

    for _ in 0..64 {
        let have: T = T::sample(&mut source);
        value.encode(have);
        assert_eq!(value.decode(), have);
        assert_eq!(value.bits(), encode(have).as_slice());

        let copy: EncodedValue<Vec<u8>, T> = value.to_ref().to_owned_deep();
        assert_eq!(copy, EncodedValue::from_plaintext(have));
    }

    assert_eq!(
        value.set_bit(width, true),
        Err(CodecError::IndexOutOfRange {
            index: width,
            length: width
        })
    );
    assert!(value.bit(width).is_err());
}
