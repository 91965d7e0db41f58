// SPDX-License-Identifier: Apache-2.0

extern crate alloc;

use syrup_codec::value::{Float, Integer, Value};
use syrup_codec::{decode, encode_into};

use rstest::rstest;

#[rstest]
#[case(Value::Boolean(true), "t")]
#[case(Value::Boolean(false), "f")]
#[case(Value::Integer(Integer::from(0u8)), "0+")]
#[case(Value::Integer(Integer::from(1u8)), "1+")]
#[case(Value::Integer(Integer::from(-1i8)), "1-")]
#[case(Value::Integer(Integer::from(-10000i32)), "10000-")]
#[case(Value::from("hello"), "5\"hello")]
#[case(Value::from(""), "0\"")]
#[case(Value::Symbol("foo".into()), "3'foo")]
#[case(Value::from(&b"\x01\x02\x03"[..]), "3:\x01\x02\x03")]
#[case(Value::List(alloc::vec![Value::from(1u8), Value::from(2u8)]), "[1+2+]")]
fn round_trips(#[case] value: Value<'static>, #[case] wire: &str) {
    let mut buf = [0u8; 256];
    let encoded = encode_into(&value, &mut buf).unwrap();
    assert_eq!(encoded, wire.as_bytes());

    let (decoded, rest) = decode(wire.as_bytes()).unwrap();
    assert!(rest.is_empty());
    assert_eq!(decoded, value);
}

#[test]
fn float_round_trips_bit_exact() {
    let value = Value::Float(Float::new(1.5));
    let mut buf = [0u8; 16];
    let encoded = encode_into(&value, &mut buf).unwrap();
    assert_eq!(encoded[0], b'D');
    assert_eq!(encoded.len(), 9);

    let (decoded, rest) = decode(encoded).unwrap();
    assert!(rest.is_empty());
    assert_eq!(decoded, value);
}

#[test]
fn nan_is_canonicalized_to_a_single_bit_pattern() {
    let signaling = Value::Float(Float::from_bits(0x7FF0_0000_0000_0001));
    let mut buf = [0u8; 16];
    let encoded = encode_into(&signaling, &mut buf).unwrap();
    assert_eq!(
        &encoded[1..],
        &0x7FF8_0000_0000_0000u64.to_be_bytes()[..],
        "every NaN bit pattern must canonicalize to the same quiet NaN on the wire"
    );
}

#[test]
fn integer_round_trips_through_a_forty_digit_bignum() {
    let digits = b"1234567890123456789012345678901234567890";
    let value = Value::Integer(Integer::from_digits(false, digits));
    let mut buf = [0u8; 64];
    let encoded = encode_into(&value, &mut buf).unwrap();
    assert_eq!(&encoded[..digits.len()], digits);
    assert_eq!(encoded[digits.len()], b'+');

    let (decoded, rest) = decode(encoded).unwrap();
    assert!(rest.is_empty());
    assert_eq!(decoded, value);
}

#[test]
fn dictionary_canonicalizes_by_wire_key_bytes_not_insertion_order() {
    let mut value = Value::Dictionary(alloc::vec![
        (Value::from("z"), Value::from(1u8)),
        (Value::from("a"), Value::from(2u8)),
        (Value::from("m"), Value::from(3u8)),
    ]);
    syrup_codec::canonical::canonicalize(&mut value);

    let mut buf = [0u8; 64];
    let encoded = encode_into(&value, &mut buf).unwrap();
    assert_eq!(encoded, b"{1\"a2+1\"m3+1\"z1+}");
}

#[test]
fn bytes_and_string_of_equal_payload_are_different_kinds() {
    let string = Value::from("abc");
    let bytes = Value::from(&b"abc"[..]);
    assert_ne!(string, bytes);

    let mut sbuf = [0u8; 16];
    let mut bbuf = [0u8; 16];
    assert_ne!(
        encode_into(&string, &mut sbuf).unwrap(),
        encode_into(&bytes, &mut bbuf).unwrap()
    );
}

#[test]
fn decoding_a_non_canonical_dictionary_is_rejected() {
    let err = decode(b"{1\"z1+1\"a2+}").unwrap_err();
    assert!(matches!(err, syrup_codec::DecodeError::NonCanonical(_, _)));
}

#[test]
fn decoding_a_duplicate_set_member_is_rejected() {
    let err = decode(b"#1+1+$").unwrap_err();
    assert!(matches!(
        err,
        syrup_codec::DecodeError::NonCanonical(syrup_codec::NonCanonical::DuplicateMember, _)
    ));
}

#[test]
fn leading_zero_in_a_length_prefix_is_rejected() {
    let err = decode(b"01\"a").unwrap_err();
    assert!(matches!(err, syrup_codec::DecodeError::LeadingZero(0)));
}
