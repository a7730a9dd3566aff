use proptest::prelude::*;

/// A cover and a message that fits inside it.
fn cover_and_message() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop::collection::vec(any::<u8>(), 0..512).prop_flat_map(|cover| {
        let max = cover.len() / 8;
        (Just(cover), prop::collection::vec(any::<u8>(), 0..=max))
    })
}

proptest! {
    #[test]
    fn message_survives_roundtrip((cover, message) in cover_and_message()) {
        let package = lsbs::embed(&cover, &message).unwrap();
        let revealed = lsbs::extract(&package);

        prop_assert_eq!(&revealed[..message.len()], &message[..]);
    }

    #[test]
    fn bytes_past_the_message_are_untouched((cover, message) in cover_and_message()) {
        let package = lsbs::embed(&cover, &message).unwrap();
        let used = message.len() * 8;

        prop_assert_eq!(package.len(), cover.len());
        prop_assert_eq!(&package[used..], &cover[used..]);
    }

    #[test]
    fn only_the_lowest_bit_changes((cover, message) in cover_and_message()) {
        let package = lsbs::embed(&cover, &message).unwrap();

        for (package_byte, cover_byte) in package.iter().zip(&cover) {
            prop_assert_eq!(package_byte & 0xFE, cover_byte & 0xFE);
        }
    }

    #[test]
    fn oversized_messages_are_rejected(
        cover in prop::collection::vec(any::<u8>(), 0..256),
        extra in 1usize..8,
    ) {
        let message = vec![0u8; cover.len() / 8 + extra];

        let err = lsbs::embed(&cover, &message).unwrap_err();

        prop_assert_eq!(err.required(), message.len() * 8);
        prop_assert_eq!(err.available(), cover.len());
        prop_assert_eq!(err.into_carrier(), cover);
    }

    #[test]
    fn extract_length_rounds_down(cover in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(lsbs::extract(&cover).len(), cover.len() / 8);
    }
}
