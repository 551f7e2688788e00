#[cfg(test)]
mod test {
    use crate::codec::pack::{AMOUNT_MAX, YEAR_MAX};
    use crate::codec::v1::{decode_v1, encode_v1, TOKEN_V1_LEN};
    use crate::codec::v2::{decode_v2, encode_v2, TOKEN_V2_LEN};
    use crate::error::TokenError;

    #[test]
    fn v1_round_trip_across_field_ranges() {
        let years = [0u16, 1, 1999, 2024, 8191, YEAR_MAX];
        let months = [1u8, 2, 6, 12];
        let days = [1u8, 15, 28, 30, 31];
        let amounts = [0u32, 1, 99, 1050, 1_000_000, AMOUNT_MAX];

        for &y in &years {
            for &m in &months {
                for &d in &days {
                    for &a in &amounts {
                        let token = encode_v1(y, m, d, a).unwrap();
                        assert_eq!(token.len(), TOKEN_V1_LEN);
                        let got = decode_v1(&token).unwrap();
                        assert_eq!(
                            (got.year, got.month, got.day, got.amount_minor),
                            (y, m, d, a),
                            "token {}",
                            token
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn v2_round_trip_with_explicit_variants() {
        for variant in [0i64, 1, 127, 254, 255] {
            let minted = encode_v2(2024, 3, 7, 1999, Some(variant)).unwrap();
            assert_eq!(minted.token.len(), TOKEN_V2_LEN);

            let got = decode_v2(&minted.token).unwrap();
            assert_eq!(got.variant as i64, variant);
            assert_eq!(
                (got.date_amount.year, got.date_amount.month, got.date_amount.day, got.date_amount.amount_minor),
                (2024, 3, 7, 1999)
            );
        }
    }

    #[test]
    fn year_boundary() {
        assert!(encode_v1(16383, 1, 1, 0).is_ok());
        let e = encode_v1(16384, 1, 1, 0).unwrap_err();
        assert_eq!(e.field(), Some("year"));
        assert!(matches!(e, TokenError::OutOfRange { .. }));
    }

    #[test]
    fn amount_boundary() {
        assert!(encode_v1(2024, 1, 1, 33_554_431).is_ok());
        let e = encode_v1(2024, 1, 1, 33_554_432).unwrap_err();
        assert_eq!(e.field(), Some("amount"));
    }

    #[test]
    fn month_and_day_boundaries() {
        assert!(encode_v1(2024, 1, 1, 0).is_ok());
        assert!(encode_v1(2024, 12, 31, 0).is_ok());

        assert_eq!(encode_v1(2024, 0, 1, 0).unwrap_err().field(), Some("month"));
        assert_eq!(encode_v1(2024, 13, 1, 0).unwrap_err().field(), Some("month"));
        assert_eq!(encode_v1(2024, 1, 0, 0).unwrap_err().field(), Some("day"));
        assert_eq!(encode_v1(2024, 1, 32, 0).unwrap_err().field(), Some("day"));
    }

    #[test]
    fn v2_failures_match_v1_failures() {
        // both versions share the same packer, so the same input fails
        // with the same field
        let v1 = encode_v1(16384, 1, 1, 0).unwrap_err();
        let v2 = encode_v2(16384, 1, 1, 0, Some(7)).unwrap_err();
        assert_eq!(v1, v2);
    }
}
