// SPDX-License-Identifier: Apache-2.0

extern crate alloc;

use syrup_codec::captp::{captp_encode_desc_export, estimate_captp_arena, parse_decimal_fast};
use syrup_codec::value::Value;

#[test]
fn desc_export_fast_path_matches_the_general_encoder() {
    let position = 42u64;
    let mut fast_buf = [0u8; 64];
    let fast = captp_encode_desc_export(position, &mut fast_buf).unwrap();

    let general = Value::Record {
        label: alloc::boxed::Box::new(Value::Symbol("desc:export".into())),
        fields: alloc::vec![Value::from(position)],
    };
    let mut general_buf = [0u8; 64];
    let general_bytes = syrup_codec::encode_into(&general, &mut general_buf).unwrap();

    assert_eq!(fast, general_bytes);
}

#[test]
fn decimal_fast_path_matches_general_decode_for_plain_positive_integers() {
    let input = b"12345+trailer";
    let (fast_value, fast_len) = parse_decimal_fast(input).unwrap();

    let (decoded, rest) = syrup_codec::decode(input).unwrap();
    let consumed = input.len() - rest.len();

    assert_eq!(fast_len, consumed);
    match decoded {
        Value::Integer(i) => assert_eq!(i.to_u128(), Some(fast_value as u128)),
        other => panic!("expected an integer, got {:?}", other),
    }
}

#[test]
fn decimal_fast_path_declines_negative_numbers() {
    assert_eq!(parse_decimal_fast(b"5-"), None);
}

#[test]
fn decimal_fast_path_declines_a_leading_zero() {
    assert_eq!(parse_decimal_fast(b"05+"), None);
}

#[test]
fn arena_estimate_is_keyed_by_the_exact_leading_label() {
    // "op:deliver" (10 bytes) and "op:deliver-only" (15 bytes) share a
    // prefix but must not collapse to the same estimate, and a label
    // appearing only inside a nested field, not as the leading label,
    // must not match at all.
    let deliver = b"<10'op:deliver3+7'hello>";
    let deliver_only = b"<15'op:deliver-only3+>";
    let listen = b"<9'op:listen3+>";
    let nested_decoy = b"<9'op:answer10'op:deliver>";
    let unknown = b"<10'op:abandon3+>";

    let deliver_estimate = estimate_captp_arena(deliver);
    let deliver_only_estimate = estimate_captp_arena(deliver_only);
    let listen_estimate = estimate_captp_arena(listen);
    let unknown_estimate = estimate_captp_arena(unknown);

    assert!(deliver_estimate > deliver_only_estimate);
    assert!(deliver_only_estimate > listen_estimate);
    assert!(unknown_estimate > deliver_estimate);
    assert_eq!(estimate_captp_arena(nested_decoy), unknown_estimate);
}
