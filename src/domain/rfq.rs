use super::{
    booking::new_reference,
    entities::{Incoterm, Material, PaymentTerms},
    events::MarketEvent,
    pricing::{parse_quantity, PriceQuote, QuantityRequest},
    wizard::{ValidationError, WizardForm},
};

#[derive(Clone, Debug, PartialEq)]
pub struct RfqContext {
    pub supplier_id: String,
    pub supplier_name: String,
    pub material: Material,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RfqForm {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub quantity: String,
    pub target_price: String,
    pub incoterm: Incoterm,
    pub payment_terms: PaymentTerms,
    pub delivery_location: String,
    pub quality_requirements: String,
    pub compliance_needs: String,
    pub additional_notes: String,
}

impl RfqForm {
    pub fn for_material(material: &Material) -> Self {
        Self {
            quantity: material.moq.to_string(),
            ..Self::default()
        }
    }

    pub fn estimate(&self, material: &Material) -> Option<PriceQuote> {
        let quantity = parse_quantity(&self.quantity).ok()?;
        material.pricing.quote(quantity).ok()
    }

    /// `Ok(None)` when left blank.
    pub fn target_price(&self) -> Result<Option<f64>, ValidationError> {
        let raw = self.target_price.trim().trim_start_matches('$');
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(Some(value)),
            _ => Err(ValidationError::InvalidTargetPrice),
        }
    }

    /// Tier price minus target price per kg; positive means the list price is above target.
    pub fn gap_to_target(&self, material: &Material) -> Option<f64> {
        let target = self.target_price().ok().flatten()?;
        let estimate = self.estimate(material)?;
        Some(estimate.unit_price - target)
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|text| !text.is_empty())
}

#[derive(Clone, Debug, PartialEq)]
pub struct RfqRequest {
    pub reference: String,
    pub supplier_id: String,
    pub supplier: String,
    pub material_id: String,
    pub material: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub quantity: QuantityRequest,
    pub target_price: Option<f64>,
    pub incoterm: Incoterm,
    pub payment_terms: PaymentTerms,
    pub delivery_location: String,
    pub quality_requirements: Option<String>,
    pub compliance_needs: Option<String>,
    pub additional_notes: Option<String>,
    pub list_quote: PriceQuote,
}

impl RfqRequest {
    pub fn event(&self) -> MarketEvent {
        MarketEvent::RfqSubmitted {
            reference: self.reference.clone(),
            supplier: self.supplier.clone(),
            material: self.material.clone(),
            quantity_kg: self.quantity.kg(),
        }
    }
}

impl WizardForm for RfqForm {
    type Context = RfqContext;
    type Submission = RfqRequest;

    fn validate(&self, ctx: &RfqContext) -> Vec<ValidationError> {
        let mut problems = Vec::new();
        let required = [
            ("Company name", &self.company_name),
            ("Contact person", &self.contact_person),
            ("Email", &self.email),
            ("Phone number", &self.phone),
            ("Delivery location", &self.delivery_location),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                problems.push(ValidationError::Required(label));
            }
        }
        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            problems.push(ValidationError::InvalidEmail);
        }
        if let Err(err) = QuantityRequest::parse(&self.quantity, ctx.material.moq) {
            problems.push(err.into());
        }
        if let Err(err) = self.target_price() {
            problems.push(err);
        }
        problems
    }

    fn build_submission(&self, ctx: &RfqContext) -> Result<RfqRequest, ValidationError> {
        let quantity = QuantityRequest::parse(&self.quantity, ctx.material.moq)?;
        let list_quote = ctx.material.pricing.quote(quantity.as_f64())?;
        let request = RfqRequest {
            reference: new_reference("RFQ"),
            supplier_id: ctx.supplier_id.clone(),
            supplier: ctx.supplier_name.clone(),
            material_id: ctx.material.id.clone(),
            material: ctx.material.display_name(),
            company_name: self.company_name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            quantity,
            target_price: self.target_price()?,
            incoterm: self.incoterm,
            payment_terms: self.payment_terms,
            delivery_location: self.delivery_location.trim().to_string(),
            quality_requirements: optional(&self.quality_requirements),
            compliance_needs: optional(&self.compliance_needs),
            additional_notes: optional(&self.additional_notes),
            list_quote,
        };
        tracing::info!(
            reference = %request.reference,
            supplier = %request.supplier,
            quantity_kg = request.quantity.kg(),
            incoterm = request.incoterm.code(),
            "rfq prepared"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::MaterialKind,
        pricing::{PriceTier, QuantityError, TierSchedule},
        wizard::{Wizard, WizardStep},
    };

    fn context() -> RfqContext {
        RfqContext {
            supplier_id: "greencycle".into(),
            supplier_name: "GreenCycle Materials".into(),
            material: Material {
                id: "rhdpe-industrial".into(),
                kind: MaterialKind::RHdpe,
                grade: "Industrial".into(),
                color: "Mixed".into(),
                mfi: "5-8 g/10min".into(),
                contamination: "< 1%".into(),
                pellet_size: "3-5mm".into(),
                available_kg: 75_000,
                moq: 10_000,
                pricing: TierSchedule::new(
                    1.02,
                    vec![PriceTier::new(20_000.0, 0.98), PriceTier::new(50_000.0, 0.95)],
                )
                .unwrap(),
            },
        }
    }

    fn filled(ctx: &RfqContext) -> RfqForm {
        RfqForm {
            company_name: "PackMaster Industries".into(),
            contact_person: "Jane Doe".into(),
            email: "jane@packmaster.com".into(),
            phone: "+1 (555) 987-6543".into(),
            delivery_location: "456 Manufacturing Dr, Chicago, IL".into(),
            ..RfqForm::for_material(&ctx.material)
        }
    }

    #[test]
    fn defaults_follow_common_terms() {
        let ctx = context();
        let form = RfqForm::for_material(&ctx.material);
        assert_eq!(form.quantity, "10000");
        assert_eq!(form.incoterm, Incoterm::Fob);
        assert_eq!(form.payment_terms, PaymentTerms::Net30);
    }

    #[test]
    fn blank_form_lists_every_required_field() {
        let ctx = context();
        let problems = RfqForm::for_material(&ctx.material).validate(&ctx);
        assert_eq!(
            problems,
            vec![
                ValidationError::Required("Company name"),
                ValidationError::Required("Contact person"),
                ValidationError::Required("Email"),
                ValidationError::Required("Phone number"),
                ValidationError::Required("Delivery location"),
            ]
        );
    }

    #[test]
    fn email_quantity_and_target_are_checked() {
        let ctx = context();
        let mut form = filled(&ctx);
        form.email = "jane.packmaster.com".into();
        form.quantity = "9000".into();
        form.target_price = "-1".into();
        assert_eq!(
            form.validate(&ctx),
            vec![
                ValidationError::InvalidEmail,
                ValidationError::Quantity(QuantityError::BelowMoq {
                    quantity: 9_000,
                    moq: 10_000
                }),
                ValidationError::InvalidTargetPrice,
            ]
        );
        assert!(!looks_like_email("jane@localhost"));
        assert!(looks_like_email("j@x.io"));
    }

    #[test]
    fn target_gap_uses_tier_price() {
        let ctx = context();
        let mut form = filled(&ctx);
        form.quantity = "20000".into();
        form.target_price = "$0.90".into();
        let gap = form.gap_to_target(&ctx.material).unwrap();
        assert!((gap - 0.08).abs() < 1e-9);
        form.target_price.clear();
        assert_eq!(form.gap_to_target(&ctx.material), None);
    }

    #[test]
    fn submission_trims_and_prices() {
        let ctx = context();
        let mut form = filled(&ctx);
        form.quantity = "50000".into();
        form.incoterm = Incoterm::Ddp;
        form.compliance_needs = " FDA letter ".into();

        let mut wizard = Wizard::new(form);
        wizard.continue_to_review(&ctx).unwrap();
        let request = wizard.submit(&ctx).unwrap();
        assert_eq!(wizard.step(), WizardStep::Submitted);
        assert!(request.reference.starts_with("RFQ-"));
        assert_eq!(request.list_quote.unit_price, 0.95);
        assert_eq!(request.compliance_needs.as_deref(), Some("FDA letter"));
        assert_eq!(request.quality_requirements, None);
        assert_eq!(request.target_price, None);
        assert!(matches!(request.event(), MarketEvent::RfqSubmitted { quantity_kg: 50_000, .. }));
    }
}
