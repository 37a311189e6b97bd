use serde::{Deserialize, Serialize};

use super::entities::{MaterialKind, Order};

/// Recycled-content position against the mandated minimum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSnapshot {
    pub total_used_kg: f64,
    pub recycled_used_kg: f64,
    pub required_pct: f64,
}

impl ComplianceSnapshot {
    pub fn current_pct(&self) -> f64 {
        if self.total_used_kg <= 0.0 {
            return 0.0;
        }
        self.recycled_used_kg / self.total_used_kg * 100.0
    }

    pub fn is_compliant(&self) -> bool {
        self.current_pct() >= self.required_pct
    }

    /// How far toward the requirement, for the progress bar. Never above 100.
    pub fn progress_pct(&self) -> f64 {
        if self.required_pct <= 0.0 {
            return 100.0;
        }
        (self.current_pct() / self.required_pct * 100.0).min(100.0)
    }

    /// Additional recycled kg needed at the current total volume.
    pub fn shortfall_kg(&self) -> Option<f64> {
        if self.is_compliant() {
            return None;
        }
        Some((self.required_pct - self.current_pct()) / 100.0 * self.total_used_kg)
    }

    /// Same position after the given orders land.
    pub fn with_orders<'a>(&self, orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut next = *self;
        for order in orders {
            next.total_used_kg += order.quantity_kg as f64;
            next.recycled_used_kg += order.recycled_kg();
        }
        next
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardKpis {
    pub order_count: usize,
    pub open_orders: usize,
    pub total_kg: u64,
    pub total_spend: f64,
    /// Material spend over material kg; freight excluded.
    pub avg_price_per_kg: Option<f64>,
    pub recycled_kg: f64,
}

impl DashboardKpis {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut kpis = orders.iter().fold(Self::default(), |mut acc, order| {
            acc.order_count += 1;
            acc.open_orders += usize::from(order.status.is_open());
            acc.total_kg += order.quantity_kg;
            acc.total_spend += order.total_value();
            acc.recycled_kg += order.recycled_kg();
            acc
        });
        if kpis.total_kg > 0 {
            let material_spend: f64 = orders.iter().map(Order::material_cost).sum();
            kpis.avg_price_per_kg = Some(material_spend / kpis.total_kg as f64);
        }
        kpis
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub kind: MaterialKind,
    pub prices: Vec<f64>,
}

/// Monthly average market price per resin family.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub months: Vec<String>,
    pub series: Vec<PriceSeries>,
}

impl PriceHistory {
    pub fn series(&self, kind: MaterialKind) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|series| series.kind == kind)
            .map(|series| series.prices.as_slice())
    }

    pub fn latest(&self, kind: MaterialKind) -> Option<f64> {
        self.series(kind)?.last().copied()
    }

    /// First month to latest month, in percent.
    pub fn change_pct(&self, kind: MaterialKind) -> Option<f64> {
        let prices = self.series(kind)?;
        let first = *prices.first()?;
        let last = *prices.last()?;
        if first <= 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }

    /// Series whose length disagrees with `months`.
    pub fn misaligned(&self) -> Vec<MaterialKind> {
        self.series
            .iter()
            .filter(|series| series.prices.len() != self.months.len())
            .map(|series| series.kind)
            .collect()
    }

    /// Lowest and highest price across every series, for chart scaling.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|series| series.prices.iter().copied())
            .fold(None, |acc, price| match acc {
                None => Some((price, price)),
                Some((lo, hi)) => Some((lo.min(price), hi.max(price))),
            })
    }
}
