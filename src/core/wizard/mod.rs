//! Generic multi-step form wizard.
//!
//! A [`Wizard`] owns its navigation state ([`WizardState`]) and the form
//! shared by every step. The steps of a flow are a sum type implementing
//! [`WizardStep`]: each variant knows its fields and how to validate them.

pub mod contractor;
pub mod rules;
pub mod tax;

pub use contractor::ContractorStep;
pub use tax::TaxStep;

use crate::errors::{AppError, AppResult};
use crate::models::form::{FieldError, FieldSpec, FormState};
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

/// One step of a flow.
pub trait WizardStep: Copy + Eq + fmt::Debug + 'static {
    /// Flow name stored alongside submissions.
    const FLOW: &'static str;

    /// Every step of the flow, in order.
    fn steps() -> &'static [Self];

    /// Initial form values.
    fn defaults() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn title(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldSpec];

    /// Validate this step against the whole form.
    fn validate(&self, form: &FormState) -> Vec<FieldError>;
}

/// Receives the form once the final step validates.
pub trait Submitter {
    /// Persist the submission and return its id.
    fn submit(&mut self, flow: &str, form: &FormState) -> AppResult<i64>;
}

/// Navigation state: 1-based current step plus the steps already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: usize,
    pub completed: BTreeSet<usize>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: 1,
            completed: BTreeSet::new(),
        }
    }
}

impl WizardState {
    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    /// Reachable steps are the completed ones and anything behind the current step.
    pub fn can_jump_to(&self, step: usize) -> bool {
        step >= 1 && (self.is_completed(step) || step < self.current_step)
    }
}

/// Result of [`Wizard::next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Current step validated; the wizard now sits on `step`.
    Advanced { step: usize },
    /// Validation failed; the wizard did not move.
    Blocked(Vec<FieldError>),
    /// Final step validated and submitted; the wizard was reset.
    Submitted { id: i64 },
}

pub struct Wizard<S: WizardStep> {
    state: WizardState,
    form: FormState,
    defaults: FormState,
    errors: Vec<FieldError>,
    _steps: PhantomData<S>,
}

impl<S: WizardStep> Default for Wizard<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WizardStep> Wizard<S> {
    pub fn new() -> Self {
        Self::with_defaults(FormState::with_defaults(S::defaults()))
    }

    /// Start from explicit defaults (used again on reset).
    pub fn with_defaults(defaults: FormState) -> Self {
        Self {
            state: WizardState::default(),
            form: defaults.clone(),
            defaults,
            errors: Vec::new(),
            _steps: PhantomData,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn step_count(&self) -> usize {
        S::steps().len()
    }

    pub fn current(&self) -> S {
        S::steps()[self.state.current_step - 1]
    }

    pub fn is_final_step(&self) -> bool {
        self.state.current_step == self.step_count()
    }

    /// Set a field value; a pending error on that field is cleared.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.form.set(name, value);
        self.errors.retain(|e| e.field != name);
    }

    /// Fields of the current step that are visible with the current values.
    pub fn visible_fields(&self) -> Vec<&'static FieldSpec> {
        self.current()
            .fields()
            .iter()
            .filter(|f| f.is_visible(&self.form))
            .collect()
    }

    /// The values that get submitted: every field of the flow that is
    /// visible with the current answers. Hidden values stay in the form.
    pub fn submission_form(&self) -> FormState {
        let mut out = FormState::new();
        for step in S::steps() {
            for field in step.fields().iter().filter(|f| f.is_visible(&self.form)) {
                out.set(field.name, self.form.get(field.name));
            }
        }
        out
    }

    /// Validate the current step; errors on hidden fields are dropped.
    pub fn validate_current(&self) -> Vec<FieldError> {
        self.validate_step(self.current())
    }

    fn validate_step(&self, step: S) -> Vec<FieldError> {
        let mut errors = step.validate(&self.form);
        errors.retain(|e| {
            step.fields()
                .iter()
                .find(|f| f.name == e.field)
                .is_none_or(|f| f.is_visible(&self.form))
        });
        errors
    }

    /// First step (1-based) whose values no longer validate, with its errors.
    fn first_invalid_step(&self) -> Option<(usize, Vec<FieldError>)> {
        S::steps().iter().enumerate().find_map(|(i, step)| {
            let errors = self.validate_step(*step);
            (!errors.is_empty()).then_some((i + 1, errors))
        })
    }

    /// Validate the current step and move forward, or submit on the last step.
    ///
    /// On the final step every step is validated again before submitting.
    /// The first one that fails becomes current, and it and all later steps
    /// lose their completed mark.
    ///
    /// A failed submission leaves the wizard on the final step with the form
    /// untouched, so calling `next` again retries it.
    pub fn next(&mut self, submitter: &mut dyn Submitter) -> AppResult<StepOutcome> {
        let errors = self.validate_current();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Ok(StepOutcome::Blocked(errors));
        }
        self.errors.clear();

        let current = self.state.current_step;
        if !self.is_final_step() {
            self.state.completed.insert(current);
            self.state.current_step = current + 1;
            return Ok(StepOutcome::Advanced {
                step: self.state.current_step,
            });
        }

        if let Some((step, errors)) = self.first_invalid_step() {
            self.state.current_step = step;
            self.state.completed.retain(|&done| done < step);
            self.errors = errors.clone();
            return Ok(StepOutcome::Blocked(errors));
        }

        match submitter.submit(S::FLOW, &self.submission_form()) {
            Ok(id) => {
                self.reset();
                Ok(StepOutcome::Submitted { id })
            }
            Err(AppError::Submission(msg)) => Err(AppError::Submission(msg)),
            Err(e) => Err(AppError::Submission(e.to_string())),
        }
    }

    /// Step back without validating; no-op on the first step.
    pub fn previous(&mut self) -> usize {
        if self.state.current_step > 1 {
            self.state.current_step -= 1;
            self.errors.clear();
        }
        self.state.current_step
    }

    pub fn jump_to(&mut self, step: usize) -> AppResult<()> {
        if step > self.step_count() || !self.state.can_jump_to(step) {
            return Err(AppError::StepLocked(step));
        }
        self.state.current_step = step;
        self.errors.clear();
        Ok(())
    }

    /// Back to step 1 with nothing completed and the default values.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        self.form = self.defaults.clone();
        self.errors.clear();
    }
}
