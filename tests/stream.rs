// SPDX-License-Identifier: Apache-2.0

extern crate alloc;

use syrup_codec::stream::{decode_streaming, read_value, ReadError};
use syrup_codec::value::Value;

#[test]
fn stream_decoder_yields_each_concatenated_value_in_order() {
    // "t" then "f" then "0+" back-to-back with no framing between them.
    let input = b"tf0+";
    let mut decoder = decode_streaming(input);

    assert_eq!(decoder.next(), Some(Ok(Value::Boolean(true))));
    assert_eq!(decoder.next(), Some(Ok(Value::Boolean(false))));
    assert_eq!(decoder.next(), Some(Ok(Value::from(0u8))));
    assert_eq!(decoder.next(), None);
}

#[test]
fn stream_decoder_stays_resumable_after_a_truncated_trailing_value() {
    let whole = b"tf0+3\"abc";
    // Drop the last byte so the final string is short by one.
    let partial = &whole[..whole.len() - 1];

    let mut decoder = decode_streaming(partial);
    assert_eq!(decoder.next(), Some(Ok(Value::Boolean(true))));
    assert_eq!(decoder.next(), Some(Ok(Value::Boolean(false))));
    assert_eq!(decoder.next(), Some(Ok(Value::from(0u8))));

    let before = decoder.remaining();
    assert_eq!(decoder.next(), Some(Err(syrup_codec::DecodeError::Truncated)));
    // The partial value's bytes must still be there for a retry.
    assert_eq!(decoder.remaining(), before);
    assert!(!decoder.remaining().is_empty());
}

#[test]
fn stream_decoder_parks_on_a_genuinely_malformed_value() {
    let mut decoder = decode_streaming(b"z");
    assert!(matches!(decoder.next(), Some(Err(_))));
    assert!(decoder.remaining().is_empty());
    // A second call must not panic or re-report; the stream is dead.
    assert_eq!(decoder.next(), None);
}

#[test]
fn read_value_pulls_exactly_one_value_byte_at_a_time() {
    let wire = b"3\"abctrailing";
    let mut reader = &wire[..];
    let mut buf = alloc::vec::Vec::new();

    let value = read_value(&mut reader, &mut buf).unwrap();
    assert_eq!(value, Value::from("abc"));
    // `reader` only advanced past the value, leaving the rest for the caller.
    assert_eq!(reader, b"trailing");
}

#[test]
fn read_value_reports_the_underlying_read_error_on_early_eof() {
    let wire = b"10\"short";
    let mut reader = &wire[..];
    let mut buf = alloc::vec::Vec::new();

    let err = read_value(&mut reader, &mut buf).unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}
