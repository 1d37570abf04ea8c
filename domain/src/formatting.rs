//! Display helpers for categories and money amounts.

/// Fallback for categories missing from the lookup tables
pub const DEFAULT_CATEGORY_COLOR: &str = "#C9CBCF";
pub const DEFAULT_CATEGORY_EMOJI: &str = "💰";

/// Profile expense categories in display order
pub const PROFILE_CATEGORIES: &[&str] = &[
    "groceries",
    "transport",
    "eating_out",
    "entertainment",
    "utilities",
    "healthcare",
    "education",
    "miscellaneous",
];

/// `eating_out` -> `Eating Out`
pub fn format_category_name(category: &str) -> String {
    category
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn category_color(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "groceries" => "#FF6384",
        "transport" => "#36A2EB",
        "eating_out" => "#FFCE56",
        "entertainment" => "#4BC0C0",
        "utilities" => "#9966FF",
        "healthcare" | "health" => "#FF9F40",
        "education" => "#45B7D1",
        "miscellaneous" => "#C9CBCF",
        _ => DEFAULT_CATEGORY_COLOR,
    }
}

pub fn category_emoji(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "groceries" => "🛒",
        "transport" => "🚗",
        "eating_out" => "🍽️",
        "entertainment" => "🎬",
        "utilities" => "💡",
        "healthcare" | "health" => "🏥",
        "education" => "📚",
        "miscellaneous" => "📦",
        "rent" => "🏠",
        "shopping" => "🛍️",
        "salary" | "income" => "💵",
        "investment" => "📈",
        "clothing" => "👕",
        "subscriptions" => "📺",
        "fitness" => "🏋️",
        "travel" => "✈️",
        _ => DEFAULT_CATEGORY_EMOJI,
    }
}

/// Parse `#RRGGBB` (leading `#` optional)
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Grouped amount with the currency symbol, e.g. `₹28,000` or `-₹1,234.50`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if fraction == 0 {
        format!("{}{}{}", sign, symbol, grouped)
    } else {
        format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
    }
}

/// Percentage clamped to a valid progress bar width
pub fn bar_width(pct: f64) -> f64 {
    if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_name() {
        assert_eq!(format_category_name("eating_out"), "Eating Out");
        assert_eq!(format_category_name("groceries"), "Groceries");
        assert_eq!(format_category_name("Eating_Out"), "Eating Out");
        assert_eq!(format_category_name(""), "");
    }

    #[test]
    fn test_lookups_fall_back_for_unknown_category() {
        assert_eq!(category_color("groceries"), "#FF6384");
        assert_eq!(category_color("pets"), DEFAULT_CATEGORY_COLOR);
        assert_eq!(category_emoji("Travel"), "✈️");
        assert_eq!(category_emoji("pets"), DEFAULT_CATEGORY_EMOJI);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF6384"), Some((255, 99, 132)));
        assert_eq!(hex_to_rgb("36a2eb"), Some((54, 162, 235)));
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(28000.0, "₹"), "₹28,000");
        assert_eq!(format_currency(999.0, "₹"), "₹999");
        assert_eq!(format_currency(-1234.5, "₹"), "-₹1,234.50");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(-0.001, "₹"), "₹0");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(125.0), 100.0);
        assert_eq!(bar_width(-3.0), 0.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
        assert_eq!(bar_width(42.5), 42.5);
    }
}
