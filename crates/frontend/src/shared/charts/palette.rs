//! Fixed chart colours.

/// Warm-to-green ramp for expense categories without their own colour.
pub const EXPENSE_COLORS: [&str; 6] = [
    "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e",
];

pub const INCOME_COLOR: &str = "#22c55e";
pub const EXPENSE_COLOR: &str = "#ef4444";
pub const AREA_COLOR: &str = "#166534";
/// Category without colour in lists.
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// Category colour if set, otherwise the palette entry for its position.
pub fn slice_color(custom: Option<&str>, index: usize, palette: &[&str]) -> String {
    match custom.map(str::trim).filter(|c| !c.is_empty()) {
        Some(color) => color.to_string(),
        None if palette.is_empty() => NEUTRAL_COLOR.to_string(),
        None => palette[index % palette.len()].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_color_wins() {
        assert_eq!(slice_color(Some("#123456"), 3, &EXPENSE_COLORS), "#123456");
    }

    #[test]
    fn palette_cycles_by_position() {
        assert_eq!(slice_color(None, 0, &EXPENSE_COLORS), "#ef4444");
        assert_eq!(slice_color(None, 7, &EXPENSE_COLORS), "#f97316");
        assert_eq!(slice_color(Some("  "), 1, &EXPENSE_COLORS), "#f97316");
        assert_eq!(slice_color(None, 2, &[]), NEUTRAL_COLOR);
    }
}
