// SPDX-License-Identifier: Apache-2.0

extern crate alloc;

use syrup_codec::basic::{scan_header, Header};
use syrup_codec::error::DecodeError;

#[test]
fn scans_booleans_and_floats() {
    assert_eq!(scan_header(b"t").unwrap(), (Header::Bool(true), 1));
    assert_eq!(scan_header(b"f").unwrap(), (Header::Bool(false), 1));

    let mut bytes = alloc::vec![b'D'];
    bytes.extend_from_slice(&1.5f64.to_be_bytes());
    assert_eq!(
        scan_header(&bytes).unwrap(),
        (Header::Float(1.5f64.to_bits()), 9)
    );
}

#[test]
fn scans_integer_magnitude_and_sign_without_consuming_digits_twice() {
    let (header, len) = scan_header(b"123+rest").unwrap();
    assert_eq!(
        header,
        Header::Integer {
            negative: false,
            digits: 3
        }
    );
    assert_eq!(len, 4);
}

#[test]
fn scans_length_prefixed_payload_markers() {
    assert_eq!(scan_header(b"5:xxxxx").unwrap(), (Header::Bytes(5), 2));
    assert_eq!(scan_header(b"3\"abc").unwrap(), (Header::Text(3), 2));
    assert_eq!(scan_header(b"3'abc").unwrap(), (Header::Symbol(3), 2));
}

#[test]
fn rejects_a_leading_zero_in_a_multi_digit_prefix() {
    assert_eq!(scan_header(b"01:x").unwrap_err(), DecodeError::LeadingZero(0));
}

#[test]
fn a_lone_zero_is_not_a_leading_zero() {
    assert_eq!(scan_header(b"0:").unwrap(), (Header::Bytes(0), 2));
}

#[test]
fn empty_input_is_truncated() {
    assert_eq!(scan_header(b"").unwrap_err(), DecodeError::Truncated);
}
