// SPDX-License-Identifier: Apache-2.0

use syrup_codec::decode;
use syrup_codec::error::{DecodeError, NonCanonical};

#[test]
fn truncated_input_is_reported() {
    assert_eq!(decode(b"3\"ab").unwrap_err(), DecodeError::Truncated);
}

#[test]
fn unknown_marker_byte_is_reported() {
    assert!(matches!(decode(b"?").unwrap_err(), DecodeError::InvalidByte(0)));
}

#[test]
fn invalid_utf8_in_a_string_is_reported_at_the_payload_offset() {
    let bytes = [b'2', b'"', 0xFF, 0xFE];
    match decode(&bytes).unwrap_err() {
        DecodeError::InvalidUtf8(at) => assert_eq!(at, 2),
        other => panic!("wrong error: {:?}", other),
    }
}

#[test]
fn unordered_dictionary_keys_are_non_canonical() {
    match decode(b"{1\"b1+1\"a2+}").unwrap_err() {
        DecodeError::NonCanonical(NonCanonical::UnorderedKey, _) => (),
        other => panic!("wrong error: {:?}", other),
    }
}

#[test]
fn opaque_policy_replaces_invalid_utf8_instead_of_erroring() {
    use syrup_codec::de::{decode_with_policy, Utf8Policy};
    let bytes = [b'2', b'"', 0xFF, 0xFE];
    let (value, rest) = decode_with_policy(&bytes, Utf8Policy::Opaque).unwrap();
    assert!(rest.is_empty());
    match value {
        syrup_codec::value::Value::String(s) => assert!(s.contains('\u{FFFD}')),
        other => panic!("expected a string, got {:?}", other),
    }
}
