use crate::config::Config;
use crate::core::wizard::{ContractorStep, StepOutcome, Submitter, TaxStep, Wizard, WizardStep};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_submission;
use crate::errors::{AppError, AppResult};
use crate::models::form::{FieldError, FormState};
use crate::ui::messages::success;
use chrono::Local;
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnboardingFlow {
    /// Personal details, contract terms, compliance
    Contractor,
    /// Tax identity, GST/TDS, bank account
    Tax,
}

impl OnboardingFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingFlow::Contractor => ContractorStep::FLOW,
            OnboardingFlow::Tax => TaxStep::FLOW,
        }
    }
}

/// Contractor wizard whose currency defaults to the configured one.
pub fn contractor_wizard(cfg: &Config) -> Wizard<ContractorStep> {
    let mut defaults = FormState::with_defaults(ContractorStep::defaults());
    if !cfg.default_currency.trim().is_empty() {
        defaults.set("currency", cfg.default_currency.trim());
    }
    Wizard::with_defaults(defaults)
}

/// Stores validated forms in `onboarding_submissions`.
pub struct DbSubmitter<'a> {
    pool: &'a mut DbPool,
}

impl<'a> DbSubmitter<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }
}

impl Submitter for DbSubmitter<'_> {
    fn submit(&mut self, flow: &str, form: &FormState) -> AppResult<i64> {
        let payload =
            serde_json::to_value(form).map_err(|e| AppError::Submission(e.to_string()))?;
        let now = Local::now().to_rfc3339();

        let id = self
            .pool
            .in_transaction(|tx| insert_submission(tx, flow, &payload, &now))?;

        audit(
            &self.pool.conn,
            "onboard",
            &format!("submission #{id}"),
            &format!("{flow} onboarding submitted ({} fields)", form.len()),
        );
        success(format!("Onboarding '{}' submitted (#{}).", flow, id));

        Ok(id)
    }
}

/// Read a YAML mapping of field → value; scalars are taken as text.
pub fn load_answers(path: &Path) -> AppResult<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    let serde_yaml::Value::Mapping(map) = doc else {
        return Err(AppError::Config(format!(
            "{}: expected a mapping of field names to values",
            path.display()
        )));
    };

    let mut answers = BTreeMap::new();
    for (key, value) in map {
        let key = scalar_to_string(&key)
            .ok_or_else(|| AppError::Config(format!("{}: invalid field name", path.display())))?;
        let value = scalar_to_string(&value).ok_or_else(|| {
            AppError::Config(format!("{}: '{}' must be a plain value", path.display(), key))
        })?;
        answers.insert(key, value);
    }
    Ok(answers)
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Fill the whole form up front, then walk every step to submission.
///
/// Stops at the first step that does not validate.
pub fn run_answers<S: WizardStep>(
    wizard: &mut Wizard<S>,
    answers: &BTreeMap<String, String>,
    submitter: &mut dyn Submitter,
) -> AppResult<i64> {
    for (name, value) in answers {
        wizard.set(name, value.trim());
    }

    loop {
        match wizard.next(submitter)? {
            StepOutcome::Advanced { .. } => continue,
            StepOutcome::Blocked(errors) => return Err(AppError::Validation(errors)),
            StepOutcome::Submitted { id } => return Ok(id),
        }
    }
}

fn write_errors<W: Write>(out: &mut W, errors: &[FieldError]) -> AppResult<()> {
    for e in errors {
        writeln!(out, "  ✗ {}: {}", e.field, e.message)?;
    }
    Ok(())
}

/// Prompt-driven run. Returns `None` when input ends before submission.
///
/// An empty answer keeps the current value and `<` goes back one step.
pub fn run_interactive<S, R, W>(
    wizard: &mut Wizard<S>,
    input: &mut R,
    out: &mut W,
    submitter: &mut dyn Submitter,
) -> AppResult<Option<i64>>
where
    S: WizardStep,
    R: BufRead,
    W: Write,
{
    'steps: loop {
        let step = wizard.current();
        writeln!(
            out,
            "\n── Step {}/{}: {} ──",
            wizard.state().current_step,
            wizard.step_count(),
            step.title()
        )?;

        for field in step.fields() {
            // visibility can change while the step is being filled
            if !field.is_visible(wizard.form()) {
                continue;
            }

            let choices = if field.choices.is_empty() {
                String::new()
            } else {
                format!(" ({})", field.choices.join("/"))
            };
            write!(out, "{}{} [{}]: ", field.label, choices, wizard.form().get(field.name))?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(None);
            }

            match line.trim() {
                "" => {}
                "<" => {
                    wizard.previous();
                    continue 'steps;
                }
                value => wizard.set(field.name, value),
            }
        }

        match wizard.next(submitter) {
            Ok(StepOutcome::Advanced { .. }) => {}
            Ok(StepOutcome::Blocked(errors)) => {
                writeln!(out, "Please fix the following:")?;
                write_errors(out, &errors)?;
            }
            Ok(StepOutcome::Submitted { id }) => return Ok(Some(id)),
            Err(AppError::Submission(msg)) => {
                writeln!(out, "Submission failed: {msg}. Press enter to retry.")?;
            }
            Err(e) => return Err(e),
        }
    }
}
