// src/timestamp.rs
use chrono::NaiveDateTime;

/// Renders a timestamp as a filename-safe run token, e.g.
/// `20230501-130405-123456`.
///
/// Fields are zero-padded and the fractional part is fixed at six digits
/// (microseconds), so tokens sort lexicographically by time.
pub fn datetime_to_token(ts: NaiveDateTime) -> String {
    ts.format("%Y%m%d-%H%M%S-%6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_micro_opt(h, mi, s, micro)
            .unwrap()
    }

    #[test]
    fn test_token_format() {
        let ts = at(2023, 5, 1, 13, 4, 5, 123_456);
        assert_eq!(datetime_to_token(ts), "20230501-130405-123456");
    }

    #[test]
    fn test_token_zero_padding() {
        let ts = at(2024, 1, 9, 0, 0, 7, 42);
        assert_eq!(datetime_to_token(ts), "20240109-000007-000042");
    }

    #[test]
    fn test_tokens_sort_by_time() {
        let earlier = datetime_to_token(at(2023, 5, 1, 13, 4, 5, 999_999));
        let later = datetime_to_token(at(2023, 5, 1, 13, 4, 6, 0));
        assert!(earlier < later);
    }
}
