use thiserror::Error;
use time::Date;

use super::{
    entities::{Order, Party},
    events::MarketEvent,
    pricing::parse_quantity,
    wizard::ValidationError,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualityCheck {
    #[default]
    Passed,
    MinorIssues,
    Failed,
}

impl QualityCheck {
    pub const ALL: [QualityCheck; 3] = [Self::Passed, Self::MinorIssues, Self::Failed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "Passed - Material meets specifications",
            Self::MinorIssues => "Minor Issues - Acceptable with notes",
            Self::Failed => "Failed - Material does not meet specifications",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Condition {
    #[default]
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeliveryError {
    #[error("delivery form has {} problem(s)", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error("order {0} has not been delivered yet")]
    NotDelivered(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryForm {
    pub received_quantity: String,
    pub delivery_date: Option<Date>,
    pub received_by: String,
    pub quality_check: QualityCheck,
    pub packaging_condition: Condition,
    pub material_condition: Condition,
    pub notes: String,
    pub issues_reported: bool,
    pub issue_description: String,
    pub uploaded_documents: Vec<String>,
}

impl DeliveryForm {
    /// Pre-filled with the ordered quantity, received today.
    pub fn for_order(order: &Order, today: Date) -> Self {
        Self {
            received_quantity: order.quantity_kg.to_string(),
            delivery_date: Some(today),
            received_by: String::new(),
            quality_check: QualityCheck::Passed,
            packaging_condition: Condition::Excellent,
            material_condition: Condition::Excellent,
            notes: String::new(),
            issues_reported: false,
            issue_description: String::new(),
            uploaded_documents: Vec::new(),
        }
    }

    pub fn attach(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.uploaded_documents.contains(&name) {
            self.uploaded_documents.push(name);
        }
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut problems = Vec::new();
        if let Err(err) = parse_quantity(&self.received_quantity) {
            problems.push(err.into());
        }
        if self.delivery_date.is_none() {
            problems.push(ValidationError::Required("Delivery date"));
        }
        if self.received_by.trim().is_empty() {
            problems.push(ValidationError::Required("Received by"));
        }
        if self.issues_reported && self.issue_description.trim().is_empty() {
            problems.push(ValidationError::Required("Issue description"));
        }
        problems
    }

    /// Received minus expected, in kg and as a percentage of expected.
    pub fn variance(&self, expected_kg: u64) -> Option<Variance> {
        let received = parse_quantity(&self.received_quantity).ok()?;
        let delta_kg = received - expected_kg as f64;
        let pct = if expected_kg == 0 {
            0.0
        } else {
            delta_kg / expected_kg as f64 * 100.0
        };
        Some(Variance { delta_kg, pct })
    }

    pub fn confirm(&self, order: &Order) -> Result<(DeliveryReceipt, Vec<MarketEvent>), DeliveryError> {
        let problems = self.validate();
        let (Ok(received_kg), Some(delivery_date), true) = (
            parse_quantity(&self.received_quantity),
            self.delivery_date,
            problems.is_empty(),
        ) else {
            return Err(DeliveryError::Invalid(problems));
        };

        let receipt = DeliveryReceipt {
            order_id: order.id.clone(),
            received_kg,
            expected_kg: order.quantity_kg,
            delivery_date,
            received_by: self.received_by.trim().to_string(),
            quality_check: self.quality_check,
            packaging_condition: self.packaging_condition,
            material_condition: self.material_condition,
            notes: Some(self.notes.trim().to_string()).filter(|n| !n.is_empty()),
            issue: self
                .issues_reported
                .then(|| self.issue_description.trim().to_string()),
            documents: self.uploaded_documents.clone(),
        };

        let mut events = vec![MarketEvent::DeliveryConfirmed {
            order_id: order.id.clone(),
        }];
        if let Some(summary) = receipt.problem_summary() {
            tracing::warn!(order = %order.id, %summary, "delivery accepted with issues");
            events.push(MarketEvent::IssueReported {
                order_id: order.id.clone(),
                summary,
            });
        }
        tracing::info!(order = %order.id, received_kg, "delivery confirmed");
        Ok((receipt, events))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variance {
    pub delta_kg: f64,
    pub pct: f64,
}

impl Variance {
    pub fn is_exact(&self) -> bool {
        self.delta_kg == 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryReceipt {
    pub order_id: String,
    pub received_kg: f64,
    pub expected_kg: u64,
    pub delivery_date: Date,
    pub received_by: String,
    pub quality_check: QualityCheck,
    pub packaging_condition: Condition,
    pub material_condition: Condition,
    pub notes: Option<String>,
    pub issue: Option<String>,
    pub documents: Vec<String>,
}

impl DeliveryReceipt {
    /// Receipt for an order delivered before this session, taken at face value.
    pub fn from_records(order: &Order, received_by: &str) -> Self {
        Self {
            order_id: order.id.clone(),
            received_kg: order.quantity_kg as f64,
            expected_kg: order.quantity_kg,
            delivery_date: order.delivery_date,
            received_by: received_by.to_string(),
            quality_check: QualityCheck::Passed,
            packaging_condition: Condition::Good,
            material_condition: Condition::Good,
            notes: None,
            issue: None,
            documents: Vec::new(),
        }
    }

    /// Something the supplier must hear about: a failed QC or an explicit report.
    pub fn problem_summary(&self) -> Option<String> {
        match (&self.issue, self.quality_check) {
            (Some(issue), _) => Some(issue.clone()),
            (None, QualityCheck::Failed) => Some("material failed quality check".to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompletionCertificate {
    pub number: String,
    pub order_id: String,
    pub buyer: String,
    pub supplier: String,
    pub material: String,
    pub quantity_kg: f64,
    pub completion_date: Date,
    pub recycled_pct: f64,
    pub recycled_kg: f64,
    pub certifications: Vec<String>,
}

impl CompletionCertificate {
    pub fn issue(order: &Order, receipt: &DeliveryReceipt, buyer: &Party) -> Result<Self, DeliveryError> {
        if receipt.order_id != order.id {
            return Err(DeliveryError::NotDelivered(order.id.clone()));
        }
        Ok(Self {
            number: format!("CERT-{}", order.id),
            order_id: order.id.clone(),
            buyer: buyer.name.clone(),
            supplier: order.supplier.clone(),
            material: order.material.clone(),
            quantity_kg: receipt.received_kg,
            completion_date: receipt.delivery_date,
            recycled_pct: order.recycled_pct,
            recycled_kg: receipt.received_kg * order.recycled_pct / 100.0,
            certifications: order.certifications.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::entities::OrderStatus;

    fn order() -> Order {
        Order {
            id: "PO-2024-001".into(),
            quote_id: Some("Q-001".into()),
            rfq_id: Some("RFQ-2024-001".into()),
            supplier_id: "greencycle".into(),
            supplier: "GreenCycle Materials".into(),
            material: "rPET - Food Grade".into(),
            quantity_kg: 5_000,
            unit_price: 1.85,
            shipping_cost: 450.0,
            order_date: date!(2025 - 12 - 02),
            delivery_date: date!(2025 - 12 - 20),
            status: OrderStatus::InTransit,
            incoterm: None,
            payment_terms: None,
            lead_time_days: Some(14),
            current_step: 5,
            recycled_pct: 100.0,
            tracking: None,
            qc_report: None,
            documents: vec![],
            certifications: vec!["FDA".into(), "ISO 9001".into()],
        }
    }

    fn filled() -> DeliveryForm {
        let mut form = DeliveryForm::for_order(&order(), date!(2025 - 12 - 20));
        form.received_by = "Jane Doe".into();
        form
    }

    #[test]
    fn receiver_and_issue_text_are_required() {
        let mut form = DeliveryForm::for_order(&order(), date!(2025 - 12 - 20));
        form.issues_reported = true;
        form.delivery_date = None;
        assert_eq!(
            form.validate(),
            vec![
                ValidationError::Required("Delivery date"),
                ValidationError::Required("Received by"),
                ValidationError::Required("Issue description"),
            ]
        );
        assert!(matches!(form.confirm(&order()), Err(DeliveryError::Invalid(p)) if p.len() == 3));
    }

    #[test]
    fn variance_against_ordered_quantity() {
        let mut form = filled();
        assert!(form.variance(5_000).unwrap().is_exact());
        form.received_quantity = "4,900".into();
        let variance = form.variance(5_000).unwrap();
        assert_eq!(variance.delta_kg, -100.0);
        assert_eq!(variance.pct, -2.0);
        form.received_quantity = "lots".into();
        assert!(form.variance(5_000).is_none());
    }

    #[test]
    fn clean_delivery_emits_single_event() {
        let mut form = filled();
        form.attach("delivery-photo.jpg");
        form.attach("delivery-photo.jpg");
        let (receipt, events) = form.confirm(&order()).unwrap();
        assert_eq!(receipt.documents, vec!["delivery-photo.jpg".to_string()]);
        assert_eq!(
            events,
            vec![MarketEvent::DeliveryConfirmed {
                order_id: "PO-2024-001".into()
            }]
        );
    }

    #[test]
    fn failed_qc_also_reports_issue() {
        let mut form = filled();
        form.quality_check = QualityCheck::Failed;
        let (_, events) = form.confirm(&order()).unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[1], MarketEvent::IssueReported { summary, .. } if summary.contains("quality")));

        form.quality_check = QualityCheck::MinorIssues;
        form.issues_reported = true;
        form.issue_description = "two torn bags".into();
        let (receipt, events) = form.confirm(&order()).unwrap();
        assert_eq!(receipt.issue.as_deref(), Some("two torn bags"));
        assert!(matches!(&events[1], MarketEvent::IssueReported { summary, .. } if summary == "two torn bags"));
    }

    #[test]
    fn certificate_reflects_received_quantity() {
        let (receipt, _) = filled().confirm(&order()).unwrap();
        let buyer = Party {
            name: "PackMaster Industries".into(),
            ..Party::default()
        };
        let cert = CompletionCertificate::issue(&order(), &receipt, &buyer).unwrap();
        assert_eq!(cert.number, "CERT-PO-2024-001");
        assert_eq!(cert.recycled_kg, 5_000.0);
        assert_eq!(cert.buyer, "PackMaster Industries");

        let mut other = order();
        other.id = "ORD-2024-156".into();
        assert_eq!(
            CompletionCertificate::issue(&other, &receipt, &buyer),
            Err(DeliveryError::NotDelivered("ORD-2024-156".into()))
        );
    }
}
