//! Tiered bulk pricing for catalog materials.
//!
//! A [`TierSchedule`] pairs a base price with volume tiers. Tiers are kept in
//! ascending threshold order, so the last qualifying tier is always the one
//! with the highest threshold at or below the requested quantity.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("invalid argument: base price must be a positive number (got {0})")]
    InvalidBasePrice(f64),
    #[error("invalid argument: tier threshold must be a positive number (got {0})")]
    InvalidThreshold(f64),
    #[error("invalid argument: tier unit price must be a positive number (got {0})")]
    InvalidTierPrice(f64),
    #[error("invalid argument: duplicate tier threshold {0}")]
    DuplicateThreshold(f64),
    #[error("invalid argument: quantity must be a non-negative number (got {0})")]
    InvalidQuantity(f64),
}

/// A volume break: at `threshold_quantity` kg and above, `unit_price` applies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub threshold_quantity: f64,
    pub unit_price: f64,
}

impl PriceTier {
    pub fn new(threshold_quantity: f64, unit_price: f64) -> Self {
        Self {
            threshold_quantity,
            unit_price,
        }
    }
}

/// Base price plus validated tiers sorted by ascending threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule", into = "RawSchedule")]
pub struct TierSchedule {
    base_price: f64,
    tiers: Vec<PriceTier>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawSchedule {
    base_price: f64,
    #[serde(default)]
    tiers: Vec<PriceTier>,
}

impl TryFrom<RawSchedule> for TierSchedule {
    type Error = PricingError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        TierSchedule::new(raw.base_price, raw.tiers)
    }
}

impl From<TierSchedule> for RawSchedule {
    fn from(schedule: TierSchedule) -> Self {
        RawSchedule {
            base_price: schedule.base_price,
            tiers: schedule.tiers,
        }
    }
}

/// Result of pricing one quantity against a schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceQuote {
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    /// Index into [`TierSchedule::tiers`]; `None` when the base price applies.
    pub tier_index: Option<usize>,
    /// Discount relative to paying the base price for the same quantity.
    pub savings: f64,
}

impl TierSchedule {
    pub fn new(base_price: f64, mut tiers: Vec<PriceTier>) -> Result<Self, PricingError> {
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(PricingError::InvalidBasePrice(base_price));
        }
        for tier in &tiers {
            if !tier.threshold_quantity.is_finite() || tier.threshold_quantity <= 0.0 {
                return Err(PricingError::InvalidThreshold(tier.threshold_quantity));
            }
            if !tier.unit_price.is_finite() || tier.unit_price <= 0.0 {
                return Err(PricingError::InvalidTierPrice(tier.unit_price));
            }
        }

        tiers.sort_by(|a, b| {
            a.threshold_quantity
                .partial_cmp(&b.threshold_quantity)
                .unwrap_or(Ordering::Equal)
        });

        if let Some(pair) = tiers
            .windows(2)
            .find(|pair| pair[0].threshold_quantity == pair[1].threshold_quantity)
        {
            return Err(PricingError::DuplicateThreshold(pair[0].threshold_quantity));
        }

        Ok(Self { base_price, tiers })
    }

    pub fn flat(base_price: f64) -> Result<Self, PricingError> {
        Self::new(base_price, Vec::new())
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// Index of the tier that applies to `quantity`, if any.
    fn tier_for(&self, quantity: f64) -> Option<usize> {
        let mut selected = None;
        for (idx, tier) in self.tiers.iter().enumerate() {
            if quantity >= tier.threshold_quantity {
                selected = Some(idx);
            }
        }
        selected
    }

    pub fn resolve_unit_price(&self, quantity: f64) -> Result<f64, PricingError> {
        check_quantity(quantity)?;
        let price = self
            .tier_for(quantity)
            .map(|idx| self.tiers[idx].unit_price)
            .unwrap_or(self.base_price);
        tracing::debug!(quantity, price, "resolved unit price");
        Ok(price)
    }

    pub fn calculate_total(&self, quantity: f64) -> Result<f64, PricingError> {
        Ok(self.resolve_unit_price(quantity)? * quantity)
    }

    pub fn quote(&self, quantity: f64) -> Result<PriceQuote, PricingError> {
        check_quantity(quantity)?;
        let tier_index = self.tier_for(quantity);
        let unit_price = tier_index
            .map(|idx| self.tiers[idx].unit_price)
            .unwrap_or(self.base_price);
        Ok(PriceQuote {
            quantity,
            unit_price,
            total: unit_price * quantity,
            tier_index,
            savings: (self.base_price - unit_price) * quantity,
        })
    }

    /// The next volume break strictly above `quantity`.
    pub fn next_break(&self, quantity: f64) -> Option<&PriceTier> {
        self.tiers
            .iter()
            .find(|tier| tier.threshold_quantity > quantity)
    }

    /// Lowest and highest unit price this schedule can produce.
    pub fn price_range(&self) -> (f64, f64) {
        self.tiers.iter().fold(
            (self.base_price, self.base_price),
            |(low, high), tier| (low.min(tier.unit_price), high.max(tier.unit_price)),
        )
    }
}

fn check_quantity(quantity: f64) -> Result<(), PricingError> {
    if quantity.is_nan() || quantity < 0.0 || quantity.is_infinite() {
        return Err(PricingError::InvalidQuantity(quantity));
    }
    Ok(())
}

/// Unit price for `quantity`; `tiers` may arrive in any order.
pub fn resolve_unit_price(
    base_price: f64,
    tiers: &[PriceTier],
    quantity: f64,
) -> Result<f64, PricingError> {
    TierSchedule::new(base_price, tiers.to_vec())?.resolve_unit_price(quantity)
}

/// Extended price, unrounded.
pub fn calculate_total(
    base_price: f64,
    tiers: &[PriceTier],
    quantity: f64,
) -> Result<f64, PricingError> {
    TierSchedule::new(base_price, tiers.to_vec())?.calculate_total(quantity)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    #[error("Quantity is required")]
    Empty,
    #[error("\"{0}\" is not a number")]
    NotNumeric(String),
    #[error("Quantity cannot be negative")]
    Negative,
    #[error("Quantity must be a whole number of kilograms")]
    Fractional,
    #[error("Minimum order is {moq} kg (entered {quantity} kg)")]
    BelowMoq { quantity: u64, moq: u64 },
    #[error("Quantity cannot exceed {max} kg")]
    TooLarge { max: u64 },
}

/// Largest quantity a single order may commit to (one million tonnes).
pub const MAX_ORDER_KG: u64 = 1_000_000_000;

/// Drops thousands separators. Commas are only accepted between groups of
/// three digits in the whole part.
fn strip_grouping(text: &str) -> Option<String> {
    let (whole, fraction) = text.split_at(text.find('.').unwrap_or(text.len()));
    if fraction.contains(',') {
        return None;
    }
    if !whole.contains(',') {
        return Some(text.to_string());
    }
    let digits = whole.strip_prefix('-').unwrap_or(whole);
    let mut groups = digits.split(',');
    let lead = groups.next()?;
    let lead_ok = (1..=3).contains(&lead.len()) && lead.chars().all(|ch| ch.is_ascii_digit());
    let rest_ok = groups.all(|group| group.len() == 3 && group.chars().all(|ch| ch.is_ascii_digit()));
    (lead_ok && rest_ok).then(|| text.replace(',', ""))
}

/// Parses free-form quantity text. Thousands separators are accepted.
pub fn parse_quantity(input: &str) -> Result<f64, QuantityError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|ch| *ch != '_' && !ch.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(QuantityError::Empty);
    }
    let value: f64 = strip_grouping(&cleaned)
        .ok_or_else(|| QuantityError::NotNumeric(input.trim().to_string()))?
        .parse()
        .map_err(|_| QuantityError::NotNumeric(input.trim().to_string()))?;
    if !value.is_finite() {
        return Err(QuantityError::NotNumeric(input.trim().to_string()));
    }
    if value < 0.0 {
        return Err(QuantityError::Negative);
    }
    Ok(value)
}

/// A committed order quantity: whole kilograms, at least the MOQ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRequest(u64);

impl QuantityRequest {
    pub fn parse(input: &str, moq: u64) -> Result<Self, QuantityError> {
        let value = parse_quantity(input)?;
        if value.fract() != 0.0 {
            return Err(QuantityError::Fractional);
        }
        if value > MAX_ORDER_KG as f64 {
            return Err(QuantityError::TooLarge { max: MAX_ORDER_KG });
        }
        let quantity = value as u64;
        if quantity < moq {
            return Err(QuantityError::BelowMoq { quantity, moq });
        }
        Ok(Self(quantity))
    }

    pub fn kg(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resin_schedule() -> TierSchedule {
        TierSchedule::new(
            1.25,
            vec![
                PriceTier::new(10_000.0, 1.20),
                PriceTier::new(25_000.0, 1.15),
                PriceTier::new(50_000.0, 1.10),
            ],
        )
        .unwrap()
    }

    #[test]
    fn below_first_threshold_uses_base_price() {
        let schedule = resin_schedule();
        assert_eq!(schedule.resolve_unit_price(5_000.0).unwrap(), 1.25);
        assert_eq!(schedule.calculate_total(5_000.0).unwrap(), 6_250.0);
    }

    #[test]
    fn mid_tier_quantity_uses_that_tier() {
        let schedule = resin_schedule();
        assert_eq!(schedule.resolve_unit_price(30_000.0).unwrap(), 1.15);
        assert!((schedule.calculate_total(30_000.0).unwrap() - 34_500.0).abs() < 1e-6);
    }

    #[test]
    fn threshold_is_inclusive() {
        let schedule = resin_schedule();
        assert_eq!(schedule.resolve_unit_price(9_999.0).unwrap(), 1.25);
        assert_eq!(schedule.resolve_unit_price(10_000.0).unwrap(), 1.20);
        assert_eq!(schedule.resolve_unit_price(25_000.0).unwrap(), 1.15);
        assert_eq!(schedule.resolve_unit_price(50_000.0).unwrap(), 1.10);
    }

    #[test]
    fn empty_tiers_always_base_price() {
        let schedule = TierSchedule::flat(1.02).unwrap();
        assert_eq!(schedule.resolve_unit_price(0.0).unwrap(), 1.02);
        assert_eq!(schedule.resolve_unit_price(1_000_000.0).unwrap(), 1.02);
        assert_eq!(resolve_unit_price(1.02, &[], 750.5).unwrap(), 1.02);
    }

    #[test]
    fn unsorted_tiers_are_sorted_before_evaluation() {
        let descending = [PriceTier::new(1_000.0, 1.00), PriceTier::new(500.0, 1.10)];
        assert_eq!(resolve_unit_price(1.25, &descending, 1_200.0).unwrap(), 1.00);
        // Naive last-match over the given order would answer 1.10 here.
        assert_eq!(resolve_unit_price(1.25, &descending, 700.0).unwrap(), 1.10);

        let ascending = [PriceTier::new(500.0, 1.10), PriceTier::new(1_000.0, 1.00)];
        assert_eq!(resolve_unit_price(1.25, &ascending, 700.0).unwrap(), 1.10);

        let schedule = TierSchedule::new(1.25, descending.to_vec()).unwrap();
        let thresholds: Vec<f64> = schedule
            .tiers()
            .iter()
            .map(|tier| tier.threshold_quantity)
            .collect();
        assert_eq!(thresholds, vec![500.0, 1_000.0]);
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert_eq!(
            TierSchedule::flat(0.0),
            Err(PricingError::InvalidBasePrice(0.0))
        );
        assert_eq!(
            TierSchedule::new(1.0, vec![PriceTier::new(0.0, 0.9)]),
            Err(PricingError::InvalidThreshold(0.0))
        );
        assert_eq!(
            TierSchedule::new(1.0, vec![PriceTier::new(100.0, -0.9)]),
            Err(PricingError::InvalidTierPrice(-0.9))
        );
        assert_eq!(
            TierSchedule::new(
                1.0,
                vec![PriceTier::new(100.0, 0.9), PriceTier::new(100.0, 0.8)]
            ),
            Err(PricingError::DuplicateThreshold(100.0))
        );
        assert_eq!(
            resolve_unit_price(1.0, &[], -1.0),
            Err(PricingError::InvalidQuantity(-1.0))
        );
        assert!(resolve_unit_price(1.0, &[], f64::NAN).is_err());
        assert!(resolve_unit_price(f64::INFINITY, &[], 1.0).is_err());
    }

    #[test]
    fn quote_reports_tier_and_savings() {
        let schedule = resin_schedule();
        let quote = schedule.quote(25_000.0).unwrap();
        assert_eq!(quote.tier_index, Some(1));
        assert_eq!(quote.unit_price, 1.15);
        assert!((quote.savings - 2_500.0).abs() < 1e-6);

        let base = schedule.quote(100.0).unwrap();
        assert_eq!(base.tier_index, None);
        assert_eq!(base.savings, 0.0);
    }

    #[test]
    fn next_break_points_at_following_tier() {
        let schedule = resin_schedule();
        assert_eq!(
            schedule.next_break(5_000.0).map(|t| t.threshold_quantity),
            Some(10_000.0)
        );
        assert_eq!(
            schedule.next_break(10_000.0).map(|t| t.threshold_quantity),
            Some(25_000.0)
        );
        assert!(schedule.next_break(60_000.0).is_none());
        assert_eq!(schedule.price_range(), (1.10, 1.25));
    }

    #[test]
    fn schedule_deserializes_sorted_and_validated() {
        let json = r#"{"base_price":1.02,"tiers":[
            {"threshold_quantity":50000,"unit_price":0.95},
            {"threshold_quantity":20000,"unit_price":0.98}]}"#;
        let schedule: TierSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.tiers()[0].threshold_quantity, 20_000.0);

        let bad = r#"{"base_price":-1.0,"tiers":[]}"#;
        assert!(serde_json::from_str::<TierSchedule>(bad).is_err());
    }

    #[test]
    fn quantity_text_is_validated_not_coerced() {
        assert_eq!(parse_quantity("12,500").unwrap(), 12_500.0);
        assert_eq!(parse_quantity(" 7.5 ").unwrap(), 7.5);
        assert_eq!(parse_quantity(""), Err(QuantityError::Empty));
        assert_eq!(
            parse_quantity("ten"),
            Err(QuantityError::NotNumeric("ten".to_string()))
        );
        assert_eq!(parse_quantity("-3"), Err(QuantityError::Negative));
    }

    #[test]
    fn commas_must_group_thousands() {
        assert_eq!(parse_quantity("1,250,000").unwrap(), 1_250_000.0);
        assert_eq!(parse_quantity("2,500.75").unwrap(), 2_500.75);
        assert_eq!(parse_quantity("-1,000"), Err(QuantityError::Negative));
        for text in ["12,5", "1,2,3", "1,0000", ",500", "500,", "1.5,00"] {
            assert_eq!(
                parse_quantity(text),
                Err(QuantityError::NotNumeric(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn quantity_request_enforces_moq_and_whole_kg() {
        assert_eq!(QuantityRequest::parse("5000", 5_000).unwrap().kg(), 5_000);
        assert_eq!(
            QuantityRequest::parse("4999", 5_000),
            Err(QuantityError::BelowMoq {
                quantity: 4_999,
                moq: 5_000
            })
        );
        assert_eq!(
            QuantityRequest::parse("5000.5", 5_000),
            Err(QuantityError::Fractional)
        );
    }

    #[test]
    fn quantity_request_rejects_absurd_volumes() {
        assert_eq!(
            QuantityRequest::parse("1e30", 5_000),
            Err(QuantityError::TooLarge { max: MAX_ORDER_KG })
        );
        assert_eq!(
            QuantityRequest::parse("1,000,000,001", 5_000),
            Err(QuantityError::TooLarge { max: MAX_ORDER_KG })
        );
        assert_eq!(
            QuantityRequest::parse("1,000,000,000", 5_000).unwrap().kg(),
            MAX_ORDER_KG
        );
    }

    fn arb_tiers() -> impl Strategy<Value = Vec<PriceTier>> {
        prop::collection::btree_map(1u32..100_000, 1u32..500, 0..6).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(threshold, cents)| PriceTier::new(threshold as f64, cents as f64 / 100.0))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn total_is_unit_price_times_quantity(
            tiers in arb_tiers(),
            base_cents in 1u32..500,
            quantity in 0.0f64..200_000.0,
        ) {
            let base = base_cents as f64 / 100.0;
            let unit = resolve_unit_price(base, &tiers, quantity).unwrap();
            let total = calculate_total(base, &tiers, quantity).unwrap();
            prop_assert_eq!(total, unit * quantity);
        }

        #[test]
        fn picks_highest_qualifying_threshold(
            mut tiers in arb_tiers(),
            base_cents in 1u32..500,
            quantity in 0.0f64..200_000.0,
        ) {
            let base = base_cents as f64 / 100.0;
            tiers.reverse();
            let expected = tiers
                .iter()
                .filter(|tier| tier.threshold_quantity <= quantity)
                .max_by(|a, b| a.threshold_quantity.partial_cmp(&b.threshold_quantity).unwrap())
                .map(|tier| tier.unit_price)
                .unwrap_or(base);
            prop_assert_eq!(resolve_unit_price(base, &tiers, quantity).unwrap(), expected);
        }

        #[test]
        fn decreasing_tier_prices_give_monotonic_unit_price(
            thresholds in prop::collection::btree_set(1u32..100_000, 0..6),
            q1 in 0.0f64..150_000.0,
            q2 in 0.0f64..150_000.0,
        ) {
            let tiers: Vec<PriceTier> = thresholds
                .iter()
                .enumerate()
                .map(|(idx, threshold)| PriceTier::new(*threshold as f64, 2.0 - 0.1 * (idx as f64 + 1.0)))
                .collect();
            let (low, high) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
            let schedule = TierSchedule::new(2.0, tiers).unwrap();
            prop_assert!(schedule.resolve_unit_price(high).unwrap() <= schedule.resolve_unit_price(low).unwrap());
        }
    }
}
