//! Derived money figures computed on the client.
//!
//! All of these are pure and cheap; lists call them on every render.

/// Net pay of a payroll line
pub fn net_pay(base_amount: f64, deductions: f64, advances_deducted: f64) -> f64 {
    base_amount - deductions - advances_deducted
}

/// Price per litre. Zero (or negative) quantity yields 0 instead of dividing.
pub fn unit_price(cost: f64, quantity: f64) -> f64 {
    if quantity <= 0.0 {
        return 0.0;
    }
    cost / quantity
}

/// `unit_price` formatted with two decimals ("350.00", "0.00")
pub fn format_unit_price(cost: f64, quantity: f64) -> String {
    format_amount(unit_price(cost, quantity))
}

/// Sum of `f` over `items`
pub fn sum_by<T, F>(items: &[T], f: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().map(f).sum()
}

/// Mean of `f` over `items`, 0 for an empty slice
pub fn average_by<T, F>(items: &[T], f: F) -> f64
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return 0.0;
    }
    sum_by(items, f) / items.len() as f64
}

/// Two decimals, no thousands separator
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Two decimals with a space every three digits ("1 250 000.50")
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_pay() {
        assert_eq!(net_pay(50000.0, 2000.0, 3000.0), 45000.0);
        assert_eq!(net_pay(1000.0, 0.0, 1500.0), -500.0);
    }

    #[test]
    fn test_unit_price_guards_zero_quantity() {
        assert_eq!(format_unit_price(3500.0, 0.0), "0.00");
        assert_eq!(format_unit_price(3500.0, 10.0), "350.00");
        assert_eq!(format_unit_price(100.0, 3.0), "33.33");
    }

    #[test]
    fn test_sum_and_average() {
        let values = [10.0, 20.0, 30.5];
        assert_eq!(sum_by(&values, |v| *v), 60.5);
        assert_eq!(average_by(&values[..2], |v| *v), 15.0);
        assert_eq!(average_by::<f64, _>(&[], |v| *v), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1250000.5), "1 250 000.50");
        assert_eq!(format_money(999.0), "999.00");
        assert_eq!(format_money(-4500.0), "-4 500.00");
        assert_eq!(format_money(0.0), "0.00");
    }
}
