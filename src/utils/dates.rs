/// Extract the year from a `YYYY-MM-DD` style date string.
///
/// Returns `None` when the leading component is not an integer.
pub fn extract_year(date: &str) -> Option<i32> {
    date.split('-').next()?.trim().parse::<i32>().ok()
}

/// Extract `(year, month)` from a `YYYY-MM-DD` or `YYYY-MM` style date string.
///
/// The month may be unpadded (`2004-8-1`). Only the first two components
/// are consumed, so an impossible day does not reject the date.
pub fn extract_year_month(date: &str) -> Option<(i32, u32)> {
    let mut parts = date.split('-');
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    Some((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("2004-8-1"), Some(2004));
        assert_eq!(extract_year("2011"), Some(2011));
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("unknown-08-01"), None);
    }

    #[test]
    fn test_extract_year_month() {
        assert_eq!(extract_year_month("2004-8-1"), Some((2004, 8)));
        assert_eq!(extract_year_month("2004-08"), Some((2004, 8)));
        assert_eq!(extract_year_month("2004-02-31"), Some((2004, 2)));
        assert_eq!(extract_year_month("2004"), None);
        assert_eq!(extract_year_month("2004-xx-01"), None);
    }
}
