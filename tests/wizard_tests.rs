use rtimesheet::core::wizard::rules::{Checker, EMAIL, IFSC, PAN};
use rtimesheet::core::wizard::{
    ContractorStep, StepOutcome, Submitter, TaxStep, Wizard, WizardState, WizardStep,
};
use rtimesheet::errors::{AppError, AppResult};
use rtimesheet::models::form::{FieldError, FieldSpec, FormState};

/// Records submissions in memory; can be told to fail.
#[derive(Default)]
struct MemorySubmitter {
    fail: bool,
    calls: usize,
    stored: Vec<(String, FormState)>,
}

impl Submitter for MemorySubmitter {
    fn submit(&mut self, flow: &str, form: &FormState) -> AppResult<i64> {
        self.calls += 1;
        if self.fail {
            return Err(AppError::Other("backend unavailable".into()));
        }
        self.stored.push((flow.to_string(), form.clone()));
        Ok(self.stored.len() as i64)
    }
}

/// Six steps, one required field each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Registration {
    Account,
    Profile,
    Address,
    Preferences,
    Consent,
    Review,
}

const ACCOUNT: &[FieldSpec] = &[FieldSpec::text("username", "Username")];
const PROFILE: &[FieldSpec] = &[FieldSpec::text("full_name", "Full name")];
const ADDRESS: &[FieldSpec] = &[FieldSpec::text("city", "City")];
const PREFERENCES: &[FieldSpec] = &[FieldSpec::choice("theme", "Theme", &["light", "dark"])];
const CONSENT: &[FieldSpec] = &[FieldSpec::choice("accept", "Accept terms", &["yes"])];
const REVIEW: &[FieldSpec] = &[FieldSpec::text("confirm", "Type CONFIRM")];

impl WizardStep for Registration {
    const FLOW: &'static str = "registration";

    fn steps() -> &'static [Self] {
        &[
            Self::Account,
            Self::Profile,
            Self::Address,
            Self::Preferences,
            Self::Consent,
            Self::Review,
        ]
    }

    fn defaults() -> &'static [(&'static str, &'static str)] {
        &[("theme", "light")]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Profile => "Profile",
            Self::Address => "Address",
            Self::Preferences => "Preferences",
            Self::Consent => "Consent",
            Self::Review => "Review",
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Account => ACCOUNT,
            Self::Profile => PROFILE,
            Self::Address => ADDRESS,
            Self::Preferences => PREFERENCES,
            Self::Consent => CONSENT,
            Self::Review => REVIEW,
        }
    }

    fn validate(&self, form: &FormState) -> Vec<FieldError> {
        let mut c = Checker::new(form, self.fields());
        match self {
            Self::Preferences | Self::Consent => {
                let name = self.fields()[0].name;
                c.one_of(name);
            }
            Self::Review => {
                c.require("confirm", |v| v == "CONFIRM", "Type CONFIRM to finish");
            }
            _ => {
                let name = self.fields()[0].name;
                c.min_len(name, 1, "Required");
            }
        }
        c.finish()
    }
}

fn fill_registration(w: &mut Wizard<Registration>) {
    w.set("username", "jdoe");
    w.set("full_name", "Jane Doe");
    w.set("city", "Pune");
    w.set("accept", "yes");
    w.set("confirm", "CONFIRM");
}

fn fill_contractor(w: &mut Wizard<ContractorStep>) {
    w.set("first_name", "Asha");
    w.set("last_name", "Rao");
    w.set("email", "asha@example.com");
    w.set("phone", "9876543210");
    w.set("contract_start_date", "2025-01-01");
    w.set("contract_end_date", "2025-12-31");
    w.set("rate_amount", "1500");
    w.set("pan", "ABCDE1234F");
    w.set("bank_account", "123456789012");
    w.set("ifsc_code", "HDFC0001234");
    w.set("account_holder_name", "Asha Rao");
}

fn field_names(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

#[test]
fn test_initial_state() {
    let w = Wizard::<Registration>::new();
    assert_eq!(w.state(), &WizardState::default());
    assert_eq!(w.state().current_step, 1);
    assert!(w.state().completed.is_empty());
    assert_eq!(w.step_count(), 6);
    assert_eq!(w.form().get("theme"), "light");
}

#[test]
fn test_next_with_empty_required_field_blocks() {
    let mut w = Wizard::<Registration>::new();
    let mut sub = MemorySubmitter::default();

    let outcome = w.next(&mut sub).unwrap();
    match outcome {
        StepOutcome::Blocked(errors) => assert_eq!(field_names(&errors), vec!["username"]),
        other => panic!("expected a block, got {other:?}"),
    }
    assert_eq!(w.state().current_step, 1);
    assert!(w.state().completed.is_empty());
    assert_eq!(w.errors().len(), 1);

    // fixing the field clears its error
    w.set("username", "jdoe");
    assert!(w.errors().is_empty());
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: 2 });
}

#[test]
fn test_jump_to_only_reaches_completed_or_earlier_steps() {
    let mut w = Wizard::<Registration>::new();
    let mut sub = MemorySubmitter::default();
    fill_registration(&mut w);

    w.next(&mut sub).unwrap(); // step 1 done
    let before = w.state().clone();

    assert!(matches!(w.jump_to(3), Err(AppError::StepLocked(3))));
    assert_eq!(w.state(), &before);

    w.next(&mut sub).unwrap(); // step 2 done, now on 3
    assert_eq!(w.state().current_step, 3);

    w.jump_to(1).unwrap();
    assert_eq!(w.state().current_step, 1);

    // forward to a completed step is fine, past it is not
    w.jump_to(2).unwrap();
    assert_eq!(w.state().current_step, 2);
    assert!(w.jump_to(3).is_err());
    assert!(w.jump_to(0).is_err());
    assert!(w.jump_to(7).is_err());
}

#[test]
fn test_previous_does_not_validate() {
    let mut w = Wizard::<Registration>::new();
    let mut sub = MemorySubmitter::default();

    assert_eq!(w.previous(), 1);

    w.set("username", "jdoe");
    w.next(&mut sub).unwrap();
    // step 2 is empty but going back is always allowed
    assert_eq!(w.previous(), 1);
    assert!(w.state().is_completed(1));
}

#[test]
fn test_next_validates_only_current_step() {
    let mut w = Wizard::<Registration>::new();
    let mut sub = MemorySubmitter::default();

    // later steps are empty; step 1 still advances
    w.set("username", "jdoe");
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: 2 });
}

#[test]
fn test_six_step_flow_submits_once_and_resets() {
    let mut w = Wizard::<Registration>::new();
    let mut sub = MemorySubmitter::default();
    fill_registration(&mut w);
    w.set("theme", "dark");

    for expected in 2..=6 {
        assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: expected });
    }
    assert_eq!(sub.calls, 0);

    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Submitted { id: 1 });
    assert_eq!(sub.calls, 1);

    let (flow, form) = &sub.stored[0];
    assert_eq!(flow, "registration");
    assert_eq!(form.get("theme"), "dark");
    assert_eq!(form.get("city"), "Pune");

    // reset: step 1, nothing completed, defaults back
    assert_eq!(w.state(), &WizardState::default());
    assert_eq!(w.form().get("theme"), "light");
    assert_eq!(w.form().get("username"), "");
}

#[test]
fn test_failed_submission_stays_on_final_step_and_retries() {
    let mut w = Wizard::<Registration>::new();
    let mut sub = MemorySubmitter {
        fail: true,
        ..Default::default()
    };
    fill_registration(&mut w);
    for _ in 1..6 {
        w.next(&mut sub).unwrap();
    }

    let res = w.next(&mut sub);
    assert!(matches!(res, Err(AppError::Submission(ref m)) if m.contains("backend unavailable")));
    assert_eq!(w.state().current_step, 6);
    assert_eq!(w.form().get("username"), "jdoe");

    sub.fail = false;
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Submitted { id: 1 });
    assert_eq!(sub.calls, 2);
}

#[test]
fn test_final_step_validation_blocks_submission() {
    let mut w = Wizard::<Registration>::new();
    let mut sub = MemorySubmitter::default();
    fill_registration(&mut w);
    w.set("confirm", "yes please");
    for _ in 1..6 {
        w.next(&mut sub).unwrap();
    }

    assert!(matches!(w.next(&mut sub).unwrap(), StepOutcome::Blocked(_)));
    assert_eq!(sub.calls, 0);
    assert_eq!(w.state().current_step, 6);
}

#[test]
fn test_hidden_company_name_is_not_validated_but_kept() {
    let mut w = Wizard::<ContractorStep>::new();
    let mut sub = MemorySubmitter::default();
    fill_contractor(&mut w);

    // individual: company_name hidden, a bad value is ignored and kept
    w.set("company_name", "X");
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: 2 });
    assert_eq!(w.form().get("company_name"), "X");

    // switch to company: the same value is now validated
    w.previous();
    w.set("contractor_type", "company");
    match w.next(&mut sub).unwrap() {
        StepOutcome::Blocked(errors) => assert_eq!(field_names(&errors), vec!["company_name"]),
        other => panic!("expected a block, got {other:?}"),
    }

    w.set("company_name", "Rao Consulting LLP");
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: 2 });
}

#[test]
fn test_earlier_step_broken_after_completion_blocks_submission() {
    let mut w = Wizard::<ContractorStep>::new();
    let mut sub = MemorySubmitter::default();
    fill_contractor(&mut w);

    w.next(&mut sub).unwrap();
    w.next(&mut sub).unwrap();
    assert_eq!(w.state().current_step, 3);

    // go back and spoil step 1 without re-validating it
    w.jump_to(1).unwrap();
    w.set("first_name", "");
    w.set("email", "not-an-email");
    w.jump_to(2).unwrap();
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: 3 });

    match w.next(&mut sub).unwrap() {
        StepOutcome::Blocked(errors) => {
            let mut names = field_names(&errors);
            names.sort();
            assert_eq!(names, vec!["email", "first_name"]);
        }
        other => panic!("expected a block, got {other:?}"),
    }
    assert_eq!(sub.calls, 0);
    assert!(sub.stored.is_empty());
    assert_eq!(w.state().current_step, 1);
    assert!(w.state().completed.is_empty());
    assert!(w.jump_to(3).is_err());
    assert_eq!(w.form().get("email"), "not-an-email");

    // fixing step 1 lets the flow go through again
    w.set("first_name", "Asha");
    w.set("email", "asha@example.com");
    w.next(&mut sub).unwrap();
    w.next(&mut sub).unwrap();
    assert!(matches!(w.next(&mut sub).unwrap(), StepOutcome::Submitted { id: 1 }));
    assert_eq!(sub.stored[0].1.get("first_name"), "Asha");
}

#[test]
fn test_contractor_field_rules() {
    let mut w = Wizard::<ContractorStep>::new();
    let mut sub = MemorySubmitter::default();
    fill_contractor(&mut w);
    w.set("email", "not-an-email");
    w.set("phone", "12345");

    match w.next(&mut sub).unwrap() {
        StepOutcome::Blocked(errors) => assert_eq!(field_names(&errors), vec!["email", "phone"]),
        other => panic!("expected a block, got {other:?}"),
    }

    w.set("email", "asha@example.com");
    w.set("phone", "9876543210");
    w.next(&mut sub).unwrap();

    w.set("contract_end_date", "2024-12-31");
    w.set("rate_amount", "0");
    match w.next(&mut sub).unwrap() {
        StepOutcome::Blocked(errors) => {
            assert_eq!(field_names(&errors), vec!["contract_end_date", "rate_amount"]);
            assert_eq!(errors[0].message, "End date must be after start date");
        }
        other => panic!("expected a block, got {other:?}"),
    }

    w.set("contract_end_date", "2025-12-31");
    w.set("rate_amount", "1500");
    w.next(&mut sub).unwrap();

    w.set("pan", "abcde1234f");
    w.set("ifsc_code", "HDFC1001234");
    match w.next(&mut sub).unwrap() {
        StepOutcome::Blocked(errors) => assert_eq!(field_names(&errors), vec!["pan", "ifsc_code"]),
        other => panic!("expected a block, got {other:?}"),
    }

    w.set("pan", "ABCDE1234F");
    w.set("ifsc_code", "HDFC0001234");
    assert!(matches!(w.next(&mut sub).unwrap(), StepOutcome::Submitted { .. }));

    let (flow, form) = &sub.stored[0];
    assert_eq!(flow, "contractor");
    assert_eq!(form.get("currency"), "INR");
    assert_eq!(form.get("rate_type"), "hourly");
}

#[test]
fn test_tax_conditional_gst_and_tds_fields() {
    let mut w = Wizard::<TaxStep>::new();
    let mut sub = MemorySubmitter::default();

    w.set("primary_tax_doc", "pan");
    w.set("tax_doc_number", "ABCDE1234F");
    w.set("pan", "ABCDE1234F");
    w.set("date_of_birth", "1990-04-12");
    w.set("nationality", "Indian");
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: 2 });

    // defaults: not registered, no TDS → nothing else required
    let visible: Vec<&str> = w.visible_fields().iter().map(|f| f.name).collect();
    assert_eq!(visible, vec!["gst_registration_status", "tds_applicable"]);
    assert!(w.validate_current().is_empty());

    w.set("gst_registration_status", "registered");
    w.set("tds_applicable", "yes");
    w.set("tds_rate", "150");
    match w.next(&mut sub).unwrap() {
        StepOutcome::Blocked(errors) => {
            assert_eq!(field_names(&errors), vec!["gst_number", "tds_section", "tds_rate"])
        }
        other => panic!("expected a block, got {other:?}"),
    }

    w.set("gst_number", "27ABCDE1234F1Z5");
    w.set("tds_section", "194J");
    w.set("tds_rate", "10");
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Advanced { step: 3 });

    w.set("bank_name", "HDFC Bank");
    w.set("account_number", "123456789012");
    w.set("ifsc_code", "HDFC0001234");
    w.set("account_holder_name", "Asha Rao");
    w.set("account_holder_pan", "BAD");
    assert!(matches!(w.next(&mut sub).unwrap(), StepOutcome::Blocked(_)));

    w.set("account_holder_pan", "");
    assert_eq!(w.next(&mut sub).unwrap(), StepOutcome::Submitted { id: 1 });
    assert_eq!(sub.stored[0].0, "tax");
}

#[test]
fn test_invalid_choice_is_reported() {
    let mut w = Wizard::<TaxStep>::new();
    let mut sub = MemorySubmitter::default();
    w.set("primary_tax_doc", "voter_id");
    w.set("tax_doc_number", "XYZ12345");
    w.set("pan", "ABCDE1234F");
    w.set("date_of_birth", "1990-04-12");
    w.set("nationality", "Indian");

    match w.next(&mut sub).unwrap() {
        StepOutcome::Blocked(errors) => {
            assert_eq!(errors[0].field, "primary_tax_doc");
            assert!(errors[0].message.contains("passport"));
        }
        other => panic!("expected a block, got {other:?}"),
    }
}

#[test]
fn test_identifier_patterns() {
    assert!(PAN.is_match("ABCDE1234F"));
    assert!(!PAN.is_match("abcde1234f"));
    assert!(!PAN.is_match("ABCD1234F"));

    assert!(IFSC.is_match("HDFC0001234"));
    assert!(IFSC.is_match("SBIN0AB12CD"));
    assert!(!IFSC.is_match("HDFC1001234"));

    assert!(EMAIL.is_match("asha@example.com"));
    assert!(!EMAIL.is_match("asha@example"));
    assert!(!EMAIL.is_match("asha rao@example.com"));

    let fields = [FieldSpec::text("pan", "PAN"), FieldSpec::text("alt_pan", "Alternate PAN")];
    let mut form = FormState::new();
    form.set("pan", "ABCDE1234");
    let errors = Checker::new(&form, &fields)
        .pattern("pan", &PAN, "bad PAN")
        .optional_pattern("alt_pan", &PAN, "bad PAN")
        .finish();
    assert_eq!(field_names(&errors), vec!["pan"]);
}
