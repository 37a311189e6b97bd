//! Display formatting. Amounts are rounded here and nowhere else.

use time::{macros::format_description, Date};

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$34,500.00`
pub fn usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// `$1.25/kg`
pub fn usd_per_kg(price: f64) -> String {
    format!("{}/kg", usd(price))
}

/// `25,000 kg`
pub fn kg(quantity: u64) -> String {
    format!("{} kg", group_thousands(&quantity.to_string()))
}

pub fn kg_f64(quantity: f64) -> String {
    let sign = if quantity < 0.0 { "-" } else { "" };
    format!("{sign}{}", kg(quantity.abs().round() as u64))
}

pub fn pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// `Dec 20, 2025`
pub fn date(value: Date) -> String {
    let format = format_description!("[month repr:short] [day], [year]");
    value.format(format).unwrap_or_else(|_| value.to_string())
}

/// Live estimate text; a dash while the input cannot be priced.
pub fn estimate(total: Option<f64>) -> String {
    total.map(usd).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn money_and_weights() {
        assert_eq!(usd(34_500.0), "$34,500.00");
        assert_eq!(usd(6_250.0), "$6,250.00");
        assert_eq!(usd(0.5), "$0.50");
        assert_eq!(usd(-250.0), "-$250.00");
        assert_eq!(usd_per_kg(1.15), "$1.15/kg");
        assert_eq!(kg(1_250_000), "1,250,000 kg");
        assert_eq!(kg(500), "500 kg");
        assert_eq!(kg_f64(-100.0), "-100 kg");
        assert_eq!(pct(28.0), "28.0%");
    }

    #[test]
    fn dates_and_estimates() {
        assert_eq!(date(date!(2025 - 12 - 20)), "Dec 20, 2025");
        assert_eq!(estimate(None), "—");
        assert_eq!(estimate(Some(6_250.0)), "$6,250.00");
    }
}
