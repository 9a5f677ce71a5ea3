/// Format a whole-rupee amount the way `Intl.NumberFormat('en-IN')` does:
/// the last three digits, then groups of two (₹1,00,000).
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(199), "₹199");
    }

    #[test]
    fn thousands_use_single_comma() {
        assert_eq!(format_inr(1999), "₹1,999");
        assert_eq!(format_inr(19990), "₹19,990");
    }

    #[test]
    fn lakhs_and_crores_group_by_two() {
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(4_798_800), "₹47,98,800");
        assert_eq!(format_inr(10_000_000), "₹1,00,00,000");
    }
}
