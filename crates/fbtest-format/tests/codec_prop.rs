use fbtest_format::{
    encode_level, normalize_channel, read_raw, write_raw, ChannelField, ScreenFormat,
};
use proptest::prelude::*;

fn format_565() -> ScreenFormat {
    ScreenFormat {
        width: 4,
        height: 4,
        virtual_width: 4,
        virtual_height: 4,
        bits_per_pixel: 16,
        red: ChannelField::new(11, 5),
        green: ChannelField::new(5, 6),
        blue: ChannelField::new(0, 5),
        indexed: false,
    }
}

proptest! {
    #[test]
    fn container_8_round_trips(value in 0u32..0x100) {
        let mut buf = [0u8; 4];
        write_raw(&mut buf, 8, value).unwrap();
        prop_assert_eq!(read_raw(&buf, 8).unwrap(), value);
    }

    #[test]
    fn container_16_round_trips(value in 0u32..0x1_0000) {
        let mut buf = [0u8; 4];
        write_raw(&mut buf, 16, value).unwrap();
        prop_assert_eq!(read_raw(&buf, 16).unwrap(), value);
    }

    #[test]
    fn container_24_round_trips(value in 0u32..0x100_0000) {
        let mut buf = [0xEEu8; 5];
        write_raw(&mut buf[1..4], 24, value).unwrap();
        prop_assert_eq!(read_raw(&buf[1..4], 24).unwrap(), value);
        // The guard bytes on either side are untouched.
        prop_assert_eq!(buf[0], 0xEE);
        prop_assert_eq!(buf[4], 0xEE);
    }

    #[test]
    fn container_32_round_trips(value in any::<u32>()) {
        let mut buf = [0u8; 4];
        write_raw(&mut buf, 32, value).unwrap();
        prop_assert_eq!(read_raw(&buf, 32).unwrap(), value);
    }

    #[test]
    fn level_encoding_survives_the_container(
        r in 0u8..32,
        g in 0u8..64,
        b in 0u8..32,
    ) {
        let format = format_565();
        let raw = encode_level(&format, r, g, b);
        let mut buf = [0u8; 2];
        write_raw(&mut buf, 16, raw).unwrap();
        let back = read_raw(&buf, 16).unwrap();

        // In-range levels come back exactly, left-justified into 8 bits.
        prop_assert_eq!(normalize_channel(back, &format.red).unwrap(), r << 3);
        prop_assert_eq!(normalize_channel(back, &format.green).unwrap(), g << 2);
        prop_assert_eq!(normalize_channel(back, &format.blue).unwrap(), b << 3);
    }

    #[test]
    fn level_encoding_round_trips_for_any_field(
        offset in 0u32..27,
        length in 1u32..9,
        level in 0u32..256,
    ) {
        prop_assume!(offset + length <= 32);
        let field = ChannelField::new(offset, length);
        let clamped = level.min(field.max_level());
        let raw = clamped << field.offset;
        prop_assert_eq!(field.extract(raw), clamped);
        prop_assert_eq!(
            u32::from(normalize_channel(raw, &field).unwrap()),
            clamped << (8 - length)
        );
    }
}
