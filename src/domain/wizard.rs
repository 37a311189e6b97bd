//! Two-step `Entry -> Review -> Submitted` dialog flow shared by booking and RFQ.

use thiserror::Error;

use super::pricing::{PricingError, QuantityError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Entry,
    Review,
    Submitted,
}

/// A single field-level problem, rendered next to the form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    #[error("{0}")]
    Pricing(#[from] PricingError),
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Select a preferred date")]
    DateMissing,
    #[error("Date must be after today")]
    DateNotInFuture,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Target price must be a positive number")]
    InvalidTargetPrice,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("form has {} problem(s)", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error("cannot {action} from the {step:?} step")]
    WrongStep {
        action: &'static str,
        step: WizardStep,
    },
}

/// Form content driven through the wizard.
pub trait WizardForm {
    type Context;
    type Submission;

    /// Every problem with the current field values; empty when the form is valid.
    fn validate(&self, ctx: &Self::Context) -> Vec<ValidationError>;

    /// Called only once `validate` has returned no problems.
    fn build_submission(&self, ctx: &Self::Context) -> Result<Self::Submission, ValidationError>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard<F> {
    step: WizardStep,
    form: F,
}

impl<F: WizardForm> Wizard<F> {
    pub fn new(form: F) -> Self {
        Self {
            step: WizardStep::Entry,
            form,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Edits are only accepted while on the entry step.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self.step {
            WizardStep::Entry => Some(&mut self.form),
            _ => None,
        }
    }

    pub fn can_continue(&self, ctx: &F::Context) -> bool {
        self.step == WizardStep::Entry && self.form.validate(ctx).is_empty()
    }

    pub fn continue_to_review(&mut self, ctx: &F::Context) -> Result<(), WizardError> {
        if self.step != WizardStep::Entry {
            return Err(WizardError::WrongStep {
                action: "continue",
                step: self.step,
            });
        }
        let problems = self.form.validate(ctx);
        if !problems.is_empty() {
            tracing::debug!(count = problems.len(), "wizard entry step rejected");
            return Err(WizardError::Invalid(problems));
        }
        self.step = WizardStep::Review;
        Ok(())
    }

    /// Review -> Entry, keeping every entered value.
    pub fn back(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::WrongStep {
                action: "go back",
                step: self.step,
            });
        }
        self.step = WizardStep::Entry;
        Ok(())
    }

    pub fn submit(&mut self, ctx: &F::Context) -> Result<F::Submission, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::WrongStep {
                action: "submit",
                step: self.step,
            });
        }
        let problems = self.form.validate(ctx);
        if !problems.is_empty() {
            return Err(WizardError::Invalid(problems));
        }
        let submission = self
            .form
            .build_submission(ctx)
            .map_err(|err| WizardError::Invalid(vec![err]))?;
        self.step = WizardStep::Submitted;
        Ok(submission)
    }

    /// Dialog closed: an unfinished flow returns to the entry step.
    pub fn close(&mut self) {
        if self.step == WizardStep::Review {
            self.step = WizardStep::Entry;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct NameForm {
        name: String,
    }

    impl WizardForm for NameForm {
        type Context = ();
        type Submission = String;

        fn validate(&self, _ctx: &()) -> Vec<ValidationError> {
            if self.name.trim().is_empty() {
                vec![ValidationError::Required("Name")]
            } else {
                Vec::new()
            }
        }

        fn build_submission(&self, _ctx: &()) -> Result<String, ValidationError> {
            Ok(self.name.trim().to_string())
        }
    }

    #[test]
    fn entry_is_gated_by_validation() {
        let mut wizard = Wizard::new(NameForm::default());
        assert!(!wizard.can_continue(&()));
        assert_eq!(
            wizard.continue_to_review(&()),
            Err(WizardError::Invalid(vec![ValidationError::Required("Name")]))
        );
        assert_eq!(wizard.step(), WizardStep::Entry);

        wizard.form_mut().unwrap().name = "Apex".into();
        wizard.continue_to_review(&()).unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn back_preserves_values_and_review_is_read_only() {
        let mut wizard = Wizard::new(NameForm { name: "Apex".into() });
        wizard.continue_to_review(&()).unwrap();
        assert!(wizard.form_mut().is_none());
        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::Entry);
        assert_eq!(wizard.form().name, "Apex");
    }

    #[test]
    fn submitted_is_terminal() {
        let mut wizard = Wizard::new(NameForm { name: " Apex ".into() });
        assert!(matches!(
            wizard.submit(&()),
            Err(WizardError::WrongStep { action: "submit", .. })
        ));
        wizard.continue_to_review(&()).unwrap();
        assert_eq!(wizard.submit(&()).unwrap(), "Apex");
        assert_eq!(wizard.step(), WizardStep::Submitted);

        assert!(wizard.back().is_err());
        assert!(wizard.submit(&()).is_err());
        assert!(wizard.continue_to_review(&()).is_err());
        wizard.close();
        assert_eq!(wizard.step(), WizardStep::Submitted);
    }

    #[test]
    fn closing_mid_review_returns_to_entry() {
        let mut wizard = Wizard::new(NameForm { name: "Apex".into() });
        wizard.continue_to_review(&()).unwrap();
        wizard.close();
        assert_eq!(wizard.step(), WizardStep::Entry);
        assert_eq!(wizard.form().name, "Apex");
    }
}
