// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use syrup_codec::value::Value;
use syrup_codec::{deserialize, serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Shape {
    Circle { radius: u32 },
    Point,
    Pair(i32, i32),
}

#[test]
fn struct_round_trips_through_value() {
    let point = Point { x: 3, y: -4 };
    let value = serialize(&point).unwrap();
    assert!(matches!(value, Value::Dictionary(_)));

    let back: Point = deserialize(value).unwrap();
    assert_eq!(point, back);
}

#[test]
fn option_none_becomes_the_null_record_sugar() {
    let value = serialize(&Option::<i32>::None).unwrap();
    assert!(value.is_null());

    let back: Option<i32> = deserialize(value).unwrap();
    assert_eq!(back, None);
}

#[test]
fn struct_enum_variant_round_trips() {
    let shape = Shape::Circle { radius: 7 };
    let value = serialize(&shape).unwrap();
    let back: Shape = deserialize(value).unwrap();
    assert_eq!(shape, back);
}

#[test]
fn unit_enum_variant_round_trips() {
    let shape = Shape::Point;
    let value = serialize(&shape).unwrap();
    let back: Shape = deserialize(value).unwrap();
    assert_eq!(shape, back);
}

#[test]
fn tuple_enum_variant_round_trips() {
    let shape = Shape::Pair(1, 2);
    let value = serialize(&shape).unwrap();
    let back: Shape = deserialize(value).unwrap();
    assert_eq!(shape, back);
}

#[test]
fn struct_fields_encode_as_symbols_not_strings() {
    let point = Point { x: 1, y: 2 };
    let value = serialize(&point).unwrap();
    let mut buf = [0u8; 64];
    let encoded = syrup_codec::encode_into(&value, &mut buf).unwrap();
    assert_eq!(encoded, b"{1'x1+1'y2+}");
}
