/// Trimmed value, or `None` for blank optional fields.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_none() {
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(" Nubank ").as_deref(), Some("Nubank"));
    }
}
