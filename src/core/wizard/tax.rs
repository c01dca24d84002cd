//! Contractor tax & compliance: tax identity, GST/TDS, bank account.

use super::WizardStep;
use super::rules::{Checker, IFSC, PAN};
use crate::models::form::{FieldError, FieldSpec, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxStep {
    TaxId,
    GstTds,
    Bank,
}

const TAX_ID_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice(
        "primary_tax_doc",
        "Primary tax document",
        &["pan", "aadhar", "passport", "dl"],
    ),
    FieldSpec::text("tax_doc_number", "Document number"),
    FieldSpec::text("pan", "PAN"),
    FieldSpec::text("date_of_birth", "Date of birth (YYYY-MM-DD)"),
    FieldSpec::text("nationality", "Nationality"),
];

const GST_TDS_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice(
        "gst_registration_status",
        "GST registration",
        &["registered", "not_registered", "applied"],
    ),
    FieldSpec::text("gst_number", "GST number").shown_when("gst_registration_status", "registered"),
    FieldSpec::choice("tds_applicable", "TDS applicable", &["yes", "no"]),
    FieldSpec::text("tds_section", "TDS section").shown_when("tds_applicable", "yes"),
    FieldSpec::text("tds_rate", "TDS rate % (optional)").shown_when("tds_applicable", "yes"),
];

const BANK_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("bank_name", "Bank name"),
    FieldSpec::choice("account_type", "Account type", &["savings", "current", "other"]),
    FieldSpec::text("account_number", "Account number"),
    FieldSpec::text("ifsc_code", "IFSC code"),
    FieldSpec::text("account_holder_name", "Account holder name"),
    FieldSpec::text("account_holder_pan", "Account holder PAN (optional)"),
];

impl WizardStep for TaxStep {
    const FLOW: &'static str = "tax";

    fn steps() -> &'static [Self] {
        &[Self::TaxId, Self::GstTds, Self::Bank]
    }

    fn defaults() -> &'static [(&'static str, &'static str)] {
        &[
            ("gst_registration_status", "not_registered"),
            ("tds_applicable", "no"),
            ("account_type", "savings"),
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::TaxId => "Tax identification",
            Self::GstTds => "GST & TDS",
            Self::Bank => "Bank account",
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::TaxId => TAX_ID_FIELDS,
            Self::GstTds => GST_TDS_FIELDS,
            Self::Bank => BANK_FIELDS,
        }
    }

    fn validate(&self, form: &FormState) -> Vec<FieldError> {
        let mut c = Checker::new(form, self.fields());

        match self {
            Self::TaxId => {
                c.one_of("primary_tax_doc")
                    .min_len("tax_doc_number", 5, "Valid tax document number is required")
                    .pattern("pan", &PAN, "Valid PAN format required (e.g., ABCDE1234F)")
                    .date("date_of_birth", "Date of birth is required")
                    .min_len("nationality", 2, "Nationality is required");
            }
            Self::GstTds => {
                c.one_of("gst_registration_status")
                    .min_len("gst_number", 1, "GST number is required when registered")
                    .one_of("tds_applicable")
                    .min_len("tds_section", 1, "TDS section is required")
                    .optional_number_between("tds_rate", 0.0, 100.0, "TDS rate must be between 0 and 100");
            }
            Self::Bank => {
                c.min_len("bank_name", 2, "Bank name is required")
                    .one_of("account_type")
                    .min_len("account_number", 10, "Valid account number is required")
                    .pattern("ifsc_code", &IFSC, "Valid IFSC code required")
                    .min_len("account_holder_name", 2, "Account holder name is required")
                    .optional_pattern("account_holder_pan", &PAN, "Valid PAN format required");
            }
        }

        c.finish()
    }
}
