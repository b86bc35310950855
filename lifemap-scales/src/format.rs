use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{Display, EnumString, VariantNames};

/// Formats numeric tick values as axis labels
pub trait TickFormat: Debug + Send + Sync + 'static {
    fn format_f64(&self, value: f64) -> String;

    /// Formats an `f32` tick. Above 2^24 an `f32` no longer holds every integer,
    /// so exact labels for large counts need [`TickFormat::format_f64`].
    fn format(&self, value: f32) -> String {
        self.format_f64(value as f64)
    }

    fn format_all(&self, values: &[f32]) -> Vec<String> {
        values.iter().map(|v| self.format(*v)).collect()
    }
}

/// Rounds half up to an integer, matching `Math.round`
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Integer labels, the d3 `"d"` format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerFormat;

impl TickFormat for IntegerFormat {
    fn format_f64(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        format!("{}", round_half_up(value) as i64)
    }
}

/// Labels for large counts: thousands-grouped below a million, otherwise the
/// leading digits followed by `M` or `B`. Digits are dropped, never rounded,
/// so 1,999,999 reads "1M".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbbreviatedFormat;

impl TickFormat for AbbreviatedFormat {
    fn format_f64(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let digits = format!("{}", round_half_up(value) as i64);
        let len = digits.len();
        if len < 7 {
            group_thousands(&digits)
        } else if len < 10 {
            format!("{}M", &digits[..len - 6])
        } else {
            format!("{}B", &digits[..len - 9])
        }
    }
}

/// Inserts `,` between groups of three digits of an optionally signed integer string
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Axis scaling and labeling used by the legend
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LegendMode {
    /// Linear axis with integer tick labels
    #[default]
    Linear,
    /// Log axis with abbreviated tick labels
    Logarithmic,
}

impl LegendMode {
    pub fn formatter(&self) -> Box<dyn TickFormat> {
        match self {
            LegendMode::Linear => Box::new(IntegerFormat),
            LegendMode::Logarithmic => Box::new(AbbreviatedFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0")]
    #[case(72.4, "72")]
    #[case(72.5, "73")]
    #[case(-2.5, "-2")]
    #[case(1234.0, "1234")]
    fn test_integer_format(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(IntegerFormat.format(value), expected);
    }

    #[rstest]
    #[case(500.0, "500")]
    #[case(12_345.0, "12,345")]
    #[case(999_999.0, "999,999")]
    #[case(1_500_000.0, "1M")]
    #[case(1_999_999.0, "1M")]
    #[case(25_000_000.0, "25M")]
    #[case(2_300_000_000.0, "2B")]
    #[case(-5_000.0, "-5,000")]
    fn test_abbreviated_format(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(AbbreviatedFormat.format(value), expected);
    }

    #[rstest]
    #[case(1_999_999_999.0, "1B")]
    #[case(999_999_999.0, "999M")]
    #[case(1_234_567_890_123.0, "1234B")]
    fn test_abbreviated_format_wide(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(AbbreviatedFormat.format_f64(value), expected);
    }

    #[test]
    fn test_mode_formatter() {
        assert_eq!(LegendMode::Linear.formatter().format(1_500_000.0), "1500000");
        assert_eq!(LegendMode::Logarithmic.formatter().format(1_500_000.0), "1M");
        assert_eq!(
            LegendMode::Logarithmic.formatter().format_all(&[1e3, 1e6, 1e9]),
            vec!["1,000", "1M", "1B"]
        );
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("logarithmic".parse::<LegendMode>(), Ok(LegendMode::Logarithmic));
        assert_eq!(LegendMode::Linear.to_string(), "linear");
    }
}
