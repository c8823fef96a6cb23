//!
//! The engineering notation axis formatter.
//!

/// The SI prefixes by power of ten.
const PREFIXES: [(i32, &str); 17] = [
    (-24, "y"),
    (-21, "z"),
    (-18, "a"),
    (-15, "f"),
    (-12, "p"),
    (-9, "n"),
    (-6, "µ"),
    (-3, "m"),
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
    (15, "P"),
    (18, "E"),
    (21, "Z"),
    (24, "Y"),
];

/// The smallest supported power of ten.
const MIN_EXPONENT: i32 = PREFIXES[0].0;

/// The largest supported power of ten.
const MAX_EXPONENT: i32 = PREFIXES[PREFIXES.len() - 1].0;

///
/// The engineering notation axis formatter.
///
/// Prints a value as a mantissa in `[1, 1000)` followed by the SI prefix
/// of its power of ten, e.g. `200 k` or `1 M`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngFormatter {
    /// The number of decimal places of the mantissa.
    pub places: usize,
    /// The separator between the mantissa and the prefix.
    pub separator: String,
    /// The unit appended after the prefix.
    pub unit: String,
}

impl EngFormatter {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(places: usize, separator: &str) -> Self {
        Self {
            places,
            separator: separator.to_owned(),
            unit: String::new(),
        }
    }

    ///
    /// Sets the unit.
    ///
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_owned();
        self
    }

    ///
    /// Formats `value`.
    ///
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let (mut mantissa, mut exponent) = if value == 0.0 {
            (0.0, 0)
        } else {
            let exponent = ((value.abs().log10() / 3.0).floor() * 3.0) as i32;
            let exponent = exponent.clamp(MIN_EXPONENT, MAX_EXPONENT);
            (value / 10f64.powi(exponent), exponent)
        };

        // Rounding may carry the mantissa over to the next prefix, e.g. 999.9 -> 1000.
        let rounded = self.mantissa(mantissa).parse::<f64>().unwrap_or(mantissa);
        if rounded.abs() >= 1000.0 && exponent < MAX_EXPONENT {
            mantissa /= 1000.0;
            exponent += 3;
        }

        let prefix = Self::prefix(exponent);
        if prefix.is_empty() && self.unit.is_empty() {
            self.mantissa(mantissa)
        } else {
            format!(
                "{}{}{prefix}{}",
                self.mantissa(mantissa),
                self.separator,
                self.unit
            )
        }
    }

    ///
    /// Prints the mantissa with the configured number of decimal places.
    ///
    fn mantissa(&self, mantissa: f64) -> String {
        format!("{:.*}", self.places, mantissa)
    }

    ///
    /// Returns the SI prefix of the power of ten.
    ///
    fn prefix(exponent: i32) -> &'static str {
        PREFIXES
            .iter()
            .find(|(power, _)| *power == exponent)
            .map(|(_, prefix)| *prefix)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::EngFormatter;

    const THIN_SPACE: &str = "\u{2009}";

    #[test]
    fn zero() {
        let formatter = EngFormatter::new(0, THIN_SPACE);

        assert_eq!(formatter.format(0.0), "0");
        assert_eq!(formatter.format(-0.0), "0");
    }

    #[test]
    fn no_prefix() {
        let formatter = EngFormatter::new(0, THIN_SPACE);

        assert_eq!(formatter.format(500.0), "500");
        assert_eq!(formatter.format(1.0), "1");
    }

    #[test]
    fn kilo() {
        let formatter = EngFormatter::new(0, THIN_SPACE);

        assert_eq!(formatter.format(200_000.0), "200\u{2009}k");
        assert_eq!(formatter.format(46_750.0), "47\u{2009}k");
    }

    #[test]
    fn mega() {
        let formatter = EngFormatter::new(0, THIN_SPACE);

        assert_eq!(formatter.format(1_000_000.0), "1\u{2009}M");
        assert_eq!(formatter.format(1_014_182.0), "1\u{2009}M");
    }

    #[test]
    fn rounding_carries_to_next_prefix() {
        let formatter = EngFormatter::new(0, THIN_SPACE);

        assert_eq!(formatter.format(999_999.0), "1\u{2009}M");
    }

    #[test]
    fn negative() {
        let formatter = EngFormatter::new(1, " ");

        assert_eq!(formatter.format(-2_500.0), "-2.5 k");
    }

    #[test]
    fn unit_without_prefix() {
        let formatter = EngFormatter::new(0, " ").with_unit("gas");

        assert_eq!(formatter.format(42.0), "42 gas");
        assert_eq!(formatter.format(42_000.0), "42 kgas");
    }

    #[test]
    fn clamped_to_largest_prefix() {
        let formatter = EngFormatter::new(0, " ");

        assert_eq!(formatter.format(1e27), "1000 Y");
    }

    #[test]
    fn small() {
        let formatter = EngFormatter::new(0, " ");

        assert_eq!(formatter.format(0.25), "250 m");
    }
}
