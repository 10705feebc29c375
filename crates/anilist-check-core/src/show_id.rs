use crate::error::InputError;
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Nd}$").expect("Invalid decimal digit regex")
});

/// Conversion of a caller-supplied show identifier into an AniList media id.
///
/// Strings are trimmed and may carry a sign and `_` separators between digits ("+12", "1_000").
/// Decimal digits of any script count ("１２３" is 123).
pub trait IntoShowId {
    fn into_show_id(self) -> Result<i64, InputError>;
}

macro_rules! impl_into_show_id_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoShowId for $ty {
                fn into_show_id(self) -> Result<i64, InputError> {
                    i64::try_from(self).map_err(|_| InputError::InvalidShowId(self.to_string()))
                }
            }
        )*
    };
}

impl_into_show_id_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoShowId for &str {
    fn into_show_id(self) -> Result<i64, InputError> {
        parse_show_id(self).ok_or_else(|| InputError::InvalidShowId(self.to_string()))
    }
}

impl IntoShowId for String {
    fn into_show_id(self) -> Result<i64, InputError> {
        self.as_str().into_show_id()
    }
}

impl IntoShowId for &String {
    fn into_show_id(self) -> Result<i64, InputError> {
        self.as_str().into_show_id()
    }
}

fn parse_show_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    // Underscores only between digits
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let digits = digits
        .chars()
        .filter(|c| *c != '_')
        .map(|c| decimal_digit_value(c).and_then(|d| char::from_digit(d, 10)))
        .collect::<Option<String>>()?;
    let value: i64 = if negative {
        format!("-{}", digits).parse().ok()?
    } else {
        digits.parse().ok()?
    };
    Some(value)
}

/// Value of a Unicode decimal digit. Decimal digits are encoded in runs of whole 0-9 blocks,
/// so the value is the position within the run, modulo 10.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut position = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        position += 1;
        code -= 1;
    }
    Some(position % 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_REGEX.is_match(c.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_convert() {
        assert_eq!(12345i64.into_show_id(), Ok(12345));
        assert_eq!(7u8.into_show_id(), Ok(7));
        assert_eq!((-3i32).into_show_id(), Ok(-3));
        assert!(u64::MAX.into_show_id().is_err());
    }

    #[test]
    fn test_strings_convert_like_integers() {
        assert_eq!("12345".into_show_id(), 12345u32.into_show_id());
        assert_eq!(String::from(" 42\n").into_show_id(), Ok(42));
        assert_eq!("+8".into_show_id(), Ok(8));
        assert_eq!("-8".into_show_id(), Ok(-8));
        assert_eq!("1_000".into_show_id(), Ok(1000));
    }

    #[test]
    fn test_non_ascii_decimal_digits_convert() {
        assert_eq!("１２３".into_show_id(), Ok(123));
        assert_eq!("٤٢".into_show_id(), Ok(42));
        assert_eq!("-９_０".into_show_id(), Ok(-90));
        assert_eq!("𝟗".into_show_id(), Ok(9));
    }

    #[test]
    fn test_invalid_strings_are_rejected() {
        for raw in ["abc", "", "  ", "12.5", "1e3", "_1", "1_", "1__0", "+", "- 1", "99999999999999999999", "½", "²", "一"] {
            assert_eq!(
                raw.into_show_id(),
                Err(InputError::InvalidShowId(raw.to_string())),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
