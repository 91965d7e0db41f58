// SPDX-License-Identifier: Apache-2.0

//! The cross-language verification vector: a fixed record encodes to a
//! fixed byte string with a fixed SHA-256 digest, independent of which
//! implementation produced it.

extern crate alloc;

use syrup_codec::cid;
use syrup_codec::value::Value;

fn invoke_example() -> Value<'static> {
    Value::Record {
        label: alloc::boxed::Box::new(Value::from("skill:invoke")),
        fields: alloc::vec![Value::List(alloc::vec![
            Value::Symbol("gay-mcp".into()),
            Value::Symbol("palette".into()),
            Value::Dictionary(alloc::vec![
                (Value::from("n"), Value::from(4u8)),
                (Value::from("seed"), Value::from(1069u32)),
            ]),
            Value::from(0u8),
        ])],
    }
}

#[test]
fn encodes_to_the_documented_wire_bytes() {
    let mut buf = [0u8; 128];
    let encoded = syrup_codec::encode_into(&invoke_example(), &mut buf).unwrap();
    assert_eq!(
        encoded,
        b"<12\"skill:invoke[7'gay-mcp7'palette{1\"n4+4\"seed1069+}0+]>".as_ref()
    );
}

#[test]
fn cid_matches_the_cross_language_vector() {
    let expected =
        hex::decode("06fe1dc709bea744f8a0e1cd767210cd90f2b78200f574497e876c2778fa7ffb").unwrap();
    assert_eq!(cid(&invoke_example()).to_vec(), expected);
}

#[test]
fn cid_is_deterministic_and_sensitive_to_content() {
    let a = invoke_example();
    let mut b = invoke_example();
    assert_eq!(cid(&a), cid(&b));

    if let Value::Record { fields, .. } = &mut b {
        if let Value::List(items) = &mut fields[0] {
            items[3] = Value::from(1u8);
        }
    }
    assert_ne!(cid(&a), cid(&b));
}
