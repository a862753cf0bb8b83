//! Property-based tests for the primitive reader and writer.

use proptest::prelude::*;

use robtop_bytes::{ByteOrder, FormatError, Reader, Writer};

fn order_strategy() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Little), Just(ByteOrder::Big)]
}

#[derive(Debug, Clone)]
enum Field {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    F32(f32),
}

fn field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        any::<u8>().prop_map(Field::U8),
        any::<i8>().prop_map(Field::I8),
        any::<u16>().prop_map(Field::U16),
        any::<i16>().prop_map(Field::I16),
        any::<u32>().prop_map(Field::U32),
        any::<i32>().prop_map(Field::I32),
        // finite floats compare equal after a round trip
        (-1.0e6f32..1.0e6f32).prop_map(Field::F32),
    ]
}

//
// -----------------------------------------------------------------------------
// Round trips
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_fields_roundtrip(
        fields in prop::collection::vec(field_strategy(), 0..64),
        order in order_strategy(),
    ) {
        let mut writer = Writer::new();
        for field in &fields {
            match *field {
                Field::U8(v) => { writer.write_u8(v); }
                Field::I8(v) => { writer.write_i8(v); }
                Field::U16(v) => { writer.write_u16(v, order); }
                Field::I16(v) => { writer.write_i16(v, order); }
                Field::U32(v) => { writer.write_u32(v, order); }
                Field::I32(v) => { writer.write_i32(v, order); }
                Field::F32(v) => { writer.write_f32(v, order); }
            }
        }

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        for field in &fields {
            match *field {
                Field::U8(v) => prop_assert_eq!(reader.read_u8().unwrap(), v),
                Field::I8(v) => prop_assert_eq!(reader.read_i8().unwrap(), v),
                Field::U16(v) => prop_assert_eq!(reader.read_u16(order).unwrap(), v),
                Field::I16(v) => prop_assert_eq!(reader.read_i16(order).unwrap(), v),
                Field::U32(v) => prop_assert_eq!(reader.read_u32(order).unwrap(), v),
                Field::I32(v) => prop_assert_eq!(reader.read_i32(order).unwrap(), v),
                Field::F32(v) => prop_assert_eq!(reader.read_f32(order).unwrap(), v),
            }
        }
        prop_assert!(reader.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_orders_are_mirror_images(value: u32) {
        let mut little = Writer::new();
        little.write_u32(value, ByteOrder::Little);
        let mut big = Writer::new();
        big.write_u32(value, ByteOrder::Big);

        let mut reversed = big.into_bytes();
        reversed.reverse();
        prop_assert_eq!(little.into_bytes(), reversed);
    }
}

//
// -----------------------------------------------------------------------------
// Truncation
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_short_buffer_is_truncated(bytes in prop::collection::vec(any::<u8>(), 0..4)) {
        let mut reader = Reader::new(&bytes);
        let err = reader.read_f32(ByteOrder::Little).unwrap_err();
        prop_assert_eq!(
            err,
            FormatError::Truncated { offset: 0, needed: 4, remaining: bytes.len() }
        );
    }
}

proptest! {
    #[test]
    fn prop_read_bytes_never_overruns(bytes: Vec<u8>, take in 0usize..512) {
        let mut reader = Reader::new(&bytes);
        match reader.read_bytes(take) {
            Ok(slice) => {
                prop_assert_eq!(slice, &bytes[..take]);
                prop_assert_eq!(reader.remaining(), bytes.len() - take);
            }
            Err(FormatError::Truncated { needed, remaining, .. }) => {
                prop_assert!(take > bytes.len());
                prop_assert_eq!(needed, take);
                prop_assert_eq!(remaining, bytes.len());
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}
