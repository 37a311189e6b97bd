use dioxus::prelude::*;

use crate::{
    domain::TierSchedule,
    ui::{format, theme},
};

#[derive(Clone, Debug, PartialEq)]
pub struct TierRow {
    pub range: String,
    pub unit_price: f64,
    pub discount_pct: f64,
    pub active: bool,
}

/// Base row plus one row per break; `active` marks the row a quantity resolves to.
pub fn tier_rows(schedule: &TierSchedule, quantity: Option<f64>) -> Vec<TierRow> {
    let base = schedule.base_price();
    let tiers = schedule.tiers();
    let applied = quantity.and_then(|qty| schedule.quote(qty).ok().map(|quote| quote.tier_index));

    let upper = |idx: usize| tiers.get(idx).map(|tier| tier.threshold_quantity);
    let range = |from: Option<f64>, to: Option<f64>| match (from, to) {
        (None, Some(to)) => format!("< {}", format::kg_f64(to)),
        (None, None) => "Any quantity".to_string(),
        (Some(from), Some(to)) => format!("{} – {}", format::kg_f64(from), format::kg_f64(to)),
        (Some(from), None) => format!("{}+", format::kg_f64(from)),
    };
    let discount = |price: f64| if base > 0.0 { (base - price) / base * 100.0 } else { 0.0 };

    let mut rows = vec![TierRow {
        range: range(None, upper(0)),
        unit_price: base,
        discount_pct: 0.0,
        active: applied == Some(None),
    }];
    for (idx, tier) in tiers.iter().enumerate() {
        rows.push(TierRow {
            range: range(Some(tier.threshold_quantity), upper(idx + 1)),
            unit_price: tier.unit_price,
            discount_pct: discount(tier.unit_price),
            active: applied == Some(Some(idx)),
        });
    }
    rows
}

fn discount_label(pct: f64) -> String {
    if pct > 0.0 {
        format!("-{pct:.0}%")
    } else {
        "—".to_string()
    }
}

#[component]
pub fn TierTable(schedule: TierSchedule, quantity: Option<f64>) -> Element {
    let rows = tier_rows(&schedule, quantity);
    let next_hint = quantity
        .and_then(|qty| schedule.next_break(qty).map(|tier| (qty, *tier)))
        .map(|(qty, tier)| {
            format!(
                "Order {} more to reach {}",
                format::kg_f64(tier.threshold_quantity - qty),
                format::usd_per_kg(tier.unit_price)
            )
        });

    rsx! {
        div {
            class: "{theme::table_container()}",
            table {
                class: "min-w-full text-sm",
                thead {
                    class: "{theme::table_header()}",
                    tr {
                        th { class: "px-4 py-2 text-left", "Quantity" }
                        th { class: "px-4 py-2 text-right", "Price" }
                        th { class: "px-4 py-2 text-right", "Discount" }
                    }
                }
                tbody {
                    class: "{theme::table_divider()}",
                    for row in rows {
                        tr {
                            key: "{row.range}",
                            class: if row.active { "bg-emerald-500/10 text-emerald-200" } else { "text-slate-300" },
                            td { class: "px-4 py-2", "{row.range}" }
                            td { class: "px-4 py-2 text-right font-mono", "{format::usd_per_kg(row.unit_price)}" }
                            td { class: "px-4 py-2 text-right", {discount_label(row.discount_pct)} }
                        }
                    }
                }
            }
            if let Some(hint) = next_hint {
                p { class: "border-t border-slate-800 px-4 py-2 text-xs {theme::accent_text()}", "{hint}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceTier;

    fn schedule() -> TierSchedule {
        TierSchedule::new(
            1.25,
            vec![
                PriceTier::new(25_000.0, 1.15),
                PriceTier::new(10_000.0, 1.20),
                PriceTier::new(50_000.0, 1.10),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rows_follow_sorted_breaks() {
        let rows = tier_rows(&schedule(), None);
        let ranges: Vec<_> = rows.iter().map(|row| row.range.as_str()).collect();
        assert_eq!(
            ranges,
            vec![
                "< 10,000 kg",
                "10,000 kg – 25,000 kg",
                "25,000 kg – 50,000 kg",
                "50,000 kg+",
            ]
        );
        assert!(rows.iter().all(|row| !row.active));
        assert_eq!(discount_label(rows[3].discount_pct), "-12%");
        assert_eq!(discount_label(rows[0].discount_pct), "—");
    }

    #[test]
    fn quantity_marks_applied_row() {
        let rows = tier_rows(&schedule(), Some(30_000.0));
        let active: Vec<_> = rows.iter().map(|row| row.active).collect();
        assert_eq!(active, vec![false, false, true, false]);

        let rows = tier_rows(&schedule(), Some(5_000.0));
        assert!(rows[0].active);
    }

    #[test]
    fn flat_schedule_is_single_row() {
        let rows = tier_rows(&TierSchedule::flat(0.95).unwrap(), Some(100.0));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].range, "Any quantity");
        assert!(rows[0].active);
    }
}
