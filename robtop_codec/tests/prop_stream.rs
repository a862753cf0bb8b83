//! Property-based tests for whole object streams.

use proptest::prelude::*;

use robtop_codec::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ObjectKind> {
    prop::sample::select(ObjectKind::ALL)
}

fn order_strategy() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Little), Just(ByteOrder::Big)]
}

proptest! {
    #[test]
    fn prop_stream_roundtrip(
        kinds in prop::collection::vec(kind_strategy(), 0..32),
        groups in prop::collection::vec(any::<u16>(), 0..8),
        order in order_strategy(),
    ) {
        let options = Options::default().with_order(order);
        let level: Vec<AnyObject> = kinds
            .into_iter()
            .map(|kind| {
                let mut object = AnyObject::new(kind);
                object.object_mut().add_groups(groups.iter().copied());
                object
            })
            .collect();

        let bytes = encode_objects(&level, &options).unwrap();
        prop_assert_eq!(decode_objects(&bytes, &options).unwrap(), level);
    }

    #[test]
    fn prop_iter_positions_are_increasing(kinds in prop::collection::vec(kind_strategy(), 1..16)) {
        let level: Vec<_> = kinds.into_iter().map(AnyObject::new).collect();
        let bytes = encode_objects(&level, &Options::default()).unwrap();

        let mut iter = ObjectIter::new(&bytes, Options::default());
        let mut last = 0;
        while let Some(object) = iter.next() {
            prop_assert!(object.is_ok());
            prop_assert!(iter.position() > last);
            last = iter.position();
        }
        prop_assert_eq!(last, bytes.len());
    }
}
