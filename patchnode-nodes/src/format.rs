//! Canonical decimal strings for numeric slices.
//!
//! Output is independent of locale and platform: `.` is always the decimal
//! separator, floats use the shortest digits that parse back to the same
//! value, and exponent notation is never produced.

/// Converts a number to its canonical decimal string.
///
/// # Example
///
/// ```
/// use patchnode_nodes::format::DecimalString;
///
/// assert_eq!(1.0_f64.to_decimal_string(), "1");
/// assert_eq!(3.5_f64.to_decimal_string(), "3.5");
/// assert_eq!(f64::NEG_INFINITY.to_decimal_string(), "-Infinity");
/// assert_eq!((-20_i32).to_decimal_string(), "-20");
/// ```
pub trait DecimalString {
    fn to_decimal_string(&self) -> String;
}

macro_rules! impl_for_float {
    ($($float:ty),*) => {$(
        impl DecimalString for $float {
            fn to_decimal_string(&self) -> String {
                if self.is_nan() {
                    "NaN".to_string()
                } else if self.is_infinite() {
                    let sign = if self.is_sign_negative() { "-" } else { "" };
                    format!("{sign}Infinity")
                } else {
                    // `Display` already emits the shortest round-trip digits
                    // in positional notation.
                    self.to_string()
                }
            }
        }
    )*};
}

macro_rules! impl_for_integer {
    ($($int:ty),*) => {$(
        impl DecimalString for $int {
            fn to_decimal_string(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_for_float!(f32, f64);
impl_for_integer!(i32, i64);
