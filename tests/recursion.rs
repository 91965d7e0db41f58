// SPDX-License-Identifier: Apache-2.0

//! A long run of list-open bytes with no matching closers must be
//! rejected by the recursion guard rather than overflow the stack.

extern crate alloc;

use syrup_codec::decode;
use syrup_codec::error::DecodeError;

#[test]
fn deeply_nested_lists_hit_the_recursion_limit() {
    let bytes = alloc::vec![b'['; 128 * 1024];
    assert_eq!(decode(&bytes).unwrap_err(), DecodeError::TooDeep);
}

#[test]
fn deeply_nested_records_hit_the_recursion_limit() {
    let bytes = alloc::vec![b'<'; 128 * 1024];
    assert_eq!(decode(&bytes).unwrap_err(), DecodeError::TooDeep);
}

#[test]
fn a_shallow_list_decodes_fine() {
    let (value, rest) = decode(b"[1+2+3+]").unwrap();
    assert!(rest.is_empty());
    match value {
        syrup_codec::value::Value::List(items) => assert_eq!(items.len(), 3),
        other => panic!("expected a list, got {:?}", other),
    }
}
