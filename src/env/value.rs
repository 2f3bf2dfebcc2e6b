//! Typed conversion of raw `.env` values

/// A type that can be read out of an `.env` value string
pub trait EnvValue: Sized {
    /// Parse the raw value, describing the problem on failure
    fn parse_env(raw: &str) -> std::result::Result<Self, String>;
}

macro_rules! impl_env_value_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                fn parse_env(raw: &str) -> std::result::Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| {
                        format!("'{}' is not a valid {}: {}", raw, stringify!($ty), e)
                    })
                }
            }
        )*
    };
}

impl_env_value_from_str!(i8, u8, i16, u16, i32, u32, i64, u64, usize, f32, f64);

impl EnvValue for bool {
    fn parse_env(raw: &str) -> std::result::Result<Self, String> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            other => Err(format!("'{}' is not a valid bool", other)),
        }
    }
}

impl EnvValue for String {
    fn parse_env(raw: &str) -> std::result::Result<Self, String> {
        Ok(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_respect_range() {
        assert_eq!(i8::parse_env("-128"), Ok(-128));
        assert!(i8::parse_env("128").is_err());
        assert_eq!(u16::parse_env("65535"), Ok(65535));
        assert!(u32::parse_env("-1").is_err());
        assert!(i64::parse_env("12abc").is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::parse_env("3.25"), Ok(3.25));
        assert_eq!(f32::parse_env("-0.5"), Ok(-0.5));
        assert!(f64::parse_env("three").is_err());
    }

    #[test]
    fn test_bool_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(bool::parse_env(raw), Ok(true), "{}", raw);
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(bool::parse_env(raw), Ok(false), "{}", raw);
        }
        assert!(bool::parse_env("yes").is_err());
        assert!(bool::parse_env(" true").is_err());
    }
}
