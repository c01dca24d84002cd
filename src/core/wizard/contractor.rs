//! Contractor onboarding: personal details, contract terms, compliance.

use super::WizardStep;
use super::rules::{Checker, IFSC, PAN};
use crate::models::form::{FieldError, FieldSpec, FormState};
use crate::utils::date::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractorStep {
    Personal,
    Contract,
    Compliance,
}

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("contractor_type", "Contractor type", &["individual", "company"]),
    FieldSpec::text("first_name", "First name"),
    FieldSpec::text("last_name", "Last name"),
    FieldSpec::text("company_name", "Company name").shown_when("contractor_type", "company"),
    FieldSpec::text("email", "Email"),
    FieldSpec::text("phone", "Phone"),
];

const CONTRACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("contract_start_date", "Contract start (YYYY-MM-DD)"),
    FieldSpec::text("contract_end_date", "Contract end (YYYY-MM-DD)"),
    FieldSpec::choice("rate_type", "Rate type", &["hourly", "fixed", "milestone"]),
    FieldSpec::text("rate_amount", "Rate amount"),
    FieldSpec::text("currency", "Currency"),
];

const COMPLIANCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("pan", "PAN"),
    FieldSpec::text("gst_number", "GST number (optional)"),
    FieldSpec::text("bank_account", "Bank account number"),
    FieldSpec::text("ifsc_code", "IFSC code"),
    FieldSpec::text("account_holder_name", "Account holder name"),
];

impl WizardStep for ContractorStep {
    const FLOW: &'static str = "contractor";

    fn steps() -> &'static [Self] {
        &[Self::Personal, Self::Contract, Self::Compliance]
    }

    fn defaults() -> &'static [(&'static str, &'static str)] {
        &[
            ("contractor_type", "individual"),
            ("rate_type", "hourly"),
            ("currency", "INR"),
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal information",
            Self::Contract => "Contract details",
            Self::Compliance => "Tax & compliance",
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Personal => PERSONAL_FIELDS,
            Self::Contract => CONTRACT_FIELDS,
            Self::Compliance => COMPLIANCE_FIELDS,
        }
    }

    fn validate(&self, form: &FormState) -> Vec<FieldError> {
        let mut c = Checker::new(form, self.fields());

        match self {
            Self::Personal => {
                c.one_of("contractor_type")
                    .min_len("first_name", 2, "First name is required")
                    .min_len("last_name", 2, "Last name is required")
                    .min_len("company_name", 2, "Company name is required")
                    .email("email", "Valid email is required")
                    .min_len("phone", 10, "Valid phone number is required");
            }
            Self::Contract => {
                let start = parse_date(form.get("contract_start_date"));
                let end = parse_date(form.get("contract_end_date"));

                c.date("contract_start_date", "Start date is required")
                    .date("contract_end_date", "End date is required")
                    .require(
                        "contract_end_date",
                        |_| matches!((start, end), (Some(s), Some(e)) if e > s),
                        "End date must be after start date",
                    )
                    .one_of("rate_type")
                    .positive_number("rate_amount", "Rate amount must be greater than 0")
                    .min_len("currency", 1, "Currency is required");
            }
            Self::Compliance => {
                c.pattern("pan", &PAN, "Valid PAN format is required (e.g., ABCDE1234F)")
                    .min_len("bank_account", 10, "Valid bank account number is required")
                    .pattern("ifsc_code", &IFSC, "Valid IFSC code is required")
                    .min_len("account_holder_name", 2, "Account holder name is required");
            }
        }

        c.finish()
    }
}
