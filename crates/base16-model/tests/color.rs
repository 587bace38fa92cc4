//! Property tests for the hex codec.

use base16_model::{ColorError, Rgb};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hex_roundtrip(digits in "[0-9a-fA-F]{6}") {
        let color = Rgb::from_hex(&digits).unwrap();
        prop_assert_eq!(color.to_hex(), digits.to_lowercase());

        let hashed = format!("#{digits}");
        prop_assert_eq!(Rgb::from_hex(&hashed).unwrap(), color);
    }

    #[test]
    fn channels_roundtrip(r: u8, g: u8, b: u8) {
        let color = Rgb::new(r, g, b);
        prop_assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
        prop_assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn wrong_length_is_rejected(digits in "[0-9a-f]{0,5}|[0-9a-f]{7,10}") {
        let is_format_error = matches!(
            Rgb::from_hex(&digits),
            Err(ColorError::InvalidHex { .. })
        );
        prop_assert!(is_format_error);
    }
}
