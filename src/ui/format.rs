// SPDX-License-Identifier: MPL-2.0
//! Number formatting for prices.

use crate::i18n::fluent::I18n;

/// Groups the digits of `value` in threes, separated by `separator`.
#[must_use]
pub fn group_thousands(value: u32, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Price with the locale's group separator and the currency label,
/// e.g. "3.200 TL".
#[must_use]
pub fn price(amount: u32, currency: &str, i18n: &I18n) -> String {
    let separator = i18n.tr("number-group-separator");
    format!("{} {}", group_thousands(amount, &separator), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(group_thousands(3200, "."), "3.200");
        assert_eq!(group_thousands(1_234_567, "."), "1.234.567");
        assert_eq!(group_thousands(999, "."), "999");
    }

    #[test]
    fn handles_edges() {
        assert_eq!(group_thousands(0, "."), "0");
        assert_eq!(group_thousands(1000, ","), "1,000");
        assert_eq!(group_thousands(100_000, " "), "100 000");
        assert_eq!(group_thousands(u32::MAX, "."), "4.294.967.295");
    }
}
