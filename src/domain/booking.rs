use time::{macros::format_description, Date};
use uuid::Uuid;

use super::{
    entities::{DeliveryMethod, Material},
    events::MarketEvent,
    pricing::{parse_quantity, PriceQuote, QuantityRequest},
    wizard::{ValidationError, WizardForm},
};

/// Parses the `YYYY-MM-DD` value produced by a date input.
pub fn parse_date_input(input: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input.trim(), format).ok()
}

/// Short human-facing reference such as `BK-3F9A1C0D`.
pub fn new_reference(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{prefix}-{}", &id[..8])
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingContext {
    pub supplier_id: String,
    pub supplier_name: String,
    pub material: Material,
    pub today: Date,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub quantity: String,
    pub delivery_method: DeliveryMethod,
    pub preferred_date: Option<Date>,
    pub notes: String,
}

impl BookingForm {
    /// Fresh form pre-filled with the material's minimum order.
    pub fn for_material(material: &Material) -> Self {
        Self {
            quantity: material.moq.to_string(),
            delivery_method: DeliveryMethod::Delivery,
            preferred_date: None,
            notes: String::new(),
        }
    }

    /// Live price for whatever is typed; `None` while the text is not a number.
    pub fn estimate(&self, material: &Material) -> Option<PriceQuote> {
        let quantity = parse_quantity(&self.quantity).ok()?;
        material.pricing.quote(quantity).ok()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub reference: String,
    pub supplier_id: String,
    pub supplier: String,
    pub material_id: String,
    pub material: String,
    pub quantity: QuantityRequest,
    pub delivery_method: DeliveryMethod,
    pub preferred_date: Date,
    pub notes: Option<String>,
    pub quote: PriceQuote,
}

impl BookingRequest {
    pub fn event(&self) -> MarketEvent {
        MarketEvent::BookingSubmitted {
            reference: self.reference.clone(),
            supplier: self.supplier.clone(),
            material: self.material.clone(),
            quantity_kg: self.quantity.kg(),
            estimated_total: self.quote.total,
        }
    }
}

impl WizardForm for BookingForm {
    type Context = BookingContext;
    type Submission = BookingRequest;

    fn validate(&self, ctx: &BookingContext) -> Vec<ValidationError> {
        let mut problems = Vec::new();
        if let Err(err) = QuantityRequest::parse(&self.quantity, ctx.material.moq) {
            problems.push(err.into());
        }
        match self.preferred_date {
            None => problems.push(ValidationError::DateMissing),
            Some(date) if date <= ctx.today => problems.push(ValidationError::DateNotInFuture),
            Some(_) => {}
        }
        problems
    }

    fn build_submission(&self, ctx: &BookingContext) -> Result<BookingRequest, ValidationError> {
        let quantity = QuantityRequest::parse(&self.quantity, ctx.material.moq)?;
        let preferred_date = self.preferred_date.ok_or(ValidationError::DateMissing)?;
        let quote = ctx.material.pricing.quote(quantity.as_f64())?;
        let notes = Some(self.notes.trim().to_string()).filter(|notes| !notes.is_empty());

        let request = BookingRequest {
            reference: new_reference("BK"),
            supplier_id: ctx.supplier_id.clone(),
            supplier: ctx.supplier_name.clone(),
            material_id: ctx.material.id.clone(),
            material: ctx.material.display_name(),
            quantity,
            delivery_method: self.delivery_method,
            preferred_date,
            notes,
            quote,
        };
        tracing::info!(
            reference = %request.reference,
            supplier = %request.supplier,
            quantity_kg = request.quantity.kg(),
            total = request.quote.total,
            "booking request prepared"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::{
        entities::MaterialKind,
        pricing::{PriceTier, QuantityError, TierSchedule},
        wizard::{Wizard, WizardError, WizardStep},
    };

    fn context() -> BookingContext {
        BookingContext {
            supplier_id: "greencycle".into(),
            supplier_name: "GreenCycle Materials".into(),
            material: Material {
                id: "rpet-food".into(),
                kind: MaterialKind::RPet,
                grade: "Food Grade".into(),
                color: "Clear/Natural".into(),
                mfi: "25-35 g/10min".into(),
                contamination: "< 0.5%".into(),
                pellet_size: "3-4mm".into(),
                available_kg: 50_000,
                moq: 5_000,
                pricing: TierSchedule::new(
                    1.25,
                    vec![
                        PriceTier::new(10_000.0, 1.20),
                        PriceTier::new(25_000.0, 1.15),
                        PriceTier::new(50_000.0, 1.10),
                    ],
                )
                .unwrap(),
            },
            today: date!(2025 - 12 - 01),
        }
    }

    #[test]
    fn starts_at_moq_with_base_price_estimate() {
        let ctx = context();
        let form = BookingForm::for_material(&ctx.material);
        assert_eq!(form.quantity, "5000");
        let estimate = form.estimate(&ctx.material).unwrap();
        assert_eq!(estimate.unit_price, 1.25);
        assert_eq!(estimate.total, 6_250.0);
    }

    #[test]
    fn estimate_tracks_typing_and_blanks_on_garbage() {
        let ctx = context();
        let mut form = BookingForm::for_material(&ctx.material);
        form.quantity = "30000".into();
        assert_eq!(form.estimate(&ctx.material).unwrap().unit_price, 1.15);
        form.quantity = "30k".into();
        assert!(form.estimate(&ctx.material).is_none());
    }

    #[test]
    fn entry_requires_moq_and_future_date() {
        let ctx = context();
        let mut form = BookingForm::for_material(&ctx.material);
        form.quantity = "4000".into();
        let problems = form.validate(&ctx);
        assert_eq!(
            problems,
            vec![
                ValidationError::Quantity(QuantityError::BelowMoq {
                    quantity: 4_000,
                    moq: 5_000
                }),
                ValidationError::DateMissing,
            ]
        );

        form.quantity = "12000".into();
        form.preferred_date = Some(ctx.today);
        assert_eq!(form.validate(&ctx), vec![ValidationError::DateNotInFuture]);

        form.preferred_date = Some(date!(2025 - 12 - 15));
        assert!(form.validate(&ctx).is_empty());
    }

    #[test]
    fn full_flow_produces_priced_request() {
        let ctx = context();
        let mut wizard = Wizard::new(BookingForm::for_material(&ctx.material));
        assert!(matches!(
            wizard.continue_to_review(&ctx),
            Err(WizardError::Invalid(_))
        ));

        {
            let form = wizard.form_mut().unwrap();
            form.quantity = "25,000".into();
            form.preferred_date = Some(date!(2025 - 12 - 20));
            form.delivery_method = DeliveryMethod::Pickup;
            form.notes = "  ".into();
        }
        wizard.continue_to_review(&ctx).unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.form().quantity, "25,000");
        wizard.continue_to_review(&ctx).unwrap();

        let request = wizard.submit(&ctx).unwrap();
        assert_eq!(wizard.step(), WizardStep::Submitted);
        assert!(request.reference.starts_with("BK-"));
        assert_eq!(request.reference.len(), 11);
        assert_eq!(request.quantity.kg(), 25_000);
        assert_eq!(request.quote.unit_price, 1.15);
        assert_eq!(request.notes, None);
        assert_eq!(request.delivery_method, DeliveryMethod::Pickup);
        assert!(matches!(
            request.event(),
            MarketEvent::BookingSubmitted { quantity_kg: 25_000, .. }
        ));
    }

    #[test]
    fn date_input_parsing() {
        assert_eq!(parse_date_input("2025-12-20"), Some(date!(2025 - 12 - 20)));
        assert_eq!(parse_date_input("12/20/2025"), None);
        assert_eq!(parse_date_input(""), None);
    }
}
