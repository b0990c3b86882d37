//! Gate between the form and the encoder.
//!
//! The encoder only ever sees a [`CustomerRecord`] with every field
//! populated; this module is the sole way to produce one from form state.

use thiserror::Error;

use crate::model::encoding::CustomerRecord;
use crate::model::fields::{Contract, InternetService, PaymentMethod, YesNo};

/// Form-shaped input: categorical fields may still be unset, numeric fields
/// sit at zero until the user edits them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawInput {
    /// Whether the customer is a senior citizen.
    pub senior_citizen: Option<YesNo>,
    /// Whether the customer has a partner.
    pub partner: Option<YesNo>,
    /// Whether the customer has dependents.
    pub dependents: Option<YesNo>,
    /// Months the customer has been with the company.
    pub tenure: u32,
    /// Online security subscription.
    pub online_security: Option<InternetService>,
    /// Online backup subscription.
    pub online_backup: Option<InternetService>,
    /// Device protection subscription.
    pub device_protection: Option<InternetService>,
    /// Tech support subscription.
    pub tech_support: Option<InternetService>,
    /// Contract term.
    pub contract: Option<Contract>,
    /// Whether billing is paperless.
    pub paperless_billing: Option<YesNo>,
    /// How the customer pays.
    pub payment_method: Option<PaymentMethod>,
    /// Current monthly charges.
    pub monthly_charges: f64,
    /// Lifetime total charges.
    pub total_charges: f64,
}

/// Rejection reason surfaced to the user as a single message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one field is unset or still at its zero default.
    #[error("Please fill out all the fields to get a prediction.")]
    Incomplete,
}

/// Check that every field is filled in and produce the record the encoder
/// consumes.
///
/// Zero tenure and zero charges are treated as "not filled in": the numeric
/// widgets start at zero and the reference pipeline rejected those values,
/// so a legitimately-zero entry is indistinguishable from a missing one.
pub fn validate(input: &RawInput) -> Result<CustomerRecord, ValidationError> {
    if input.tenure == 0 || input.monthly_charges == 0.0 || input.total_charges == 0.0 {
        return Err(ValidationError::Incomplete);
    }
    match (
        input.senior_citizen,
        input.partner,
        input.dependents,
        input.online_security,
        input.online_backup,
        input.device_protection,
        input.tech_support,
        input.contract,
        input.paperless_billing,
        input.payment_method,
    ) {
        (
            Some(senior_citizen),
            Some(partner),
            Some(dependents),
            Some(online_security),
            Some(online_backup),
            Some(device_protection),
            Some(tech_support),
            Some(contract),
            Some(paperless_billing),
            Some(payment_method),
        ) => Ok(CustomerRecord {
            senior_citizen,
            partner,
            dependents,
            tenure: input.tenure,
            online_security,
            online_backup,
            device_protection,
            tech_support,
            contract,
            paperless_billing,
            payment_method,
            monthly_charges: input.monthly_charges,
            total_charges: input.total_charges,
        }),
        _ => Err(ValidationError::Incomplete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> RawInput {
        RawInput {
            senior_citizen: Some(YesNo::Yes),
            partner: Some(YesNo::No),
            dependents: Some(YesNo::No),
            tenure: 12,
            online_security: Some(InternetService::NoInternetService),
            online_backup: Some(InternetService::No),
            device_protection: Some(InternetService::No),
            tech_support: Some(InternetService::No),
            contract: Some(Contract::OneYear),
            paperless_billing: Some(YesNo::Yes),
            payment_method: Some(PaymentMethod::CreditCard),
            monthly_charges: 70.5,
            total_charges: 840.0,
        }
    }

    #[test]
    fn accepts_fully_specified_input() {
        let record = validate(&complete_input()).unwrap();
        assert_eq!(record.tenure, 12);
        assert_eq!(record.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn rejects_any_unset_categorical_field() {
        let fields: [fn(&mut RawInput); 10] = [
            |input| input.senior_citizen = None,
            |input| input.partner = None,
            |input| input.dependents = None,
            |input| input.online_security = None,
            |input| input.online_backup = None,
            |input| input.device_protection = None,
            |input| input.tech_support = None,
            |input| input.contract = None,
            |input| input.paperless_billing = None,
            |input| input.payment_method = None,
        ];
        for clear in fields {
            let mut input = complete_input();
            clear(&mut input);
            assert_eq!(validate(&input), Err(ValidationError::Incomplete));
        }
    }

    #[test]
    fn rejects_zero_numerics_as_unfilled() {
        let mut input = complete_input();
        input.tenure = 0;
        assert_eq!(validate(&input), Err(ValidationError::Incomplete));

        let mut input = complete_input();
        input.monthly_charges = 0.0;
        assert_eq!(validate(&input), Err(ValidationError::Incomplete));

        let mut input = complete_input();
        input.total_charges = 0.0;
        assert_eq!(validate(&input), Err(ValidationError::Incomplete));
    }

    #[test]
    fn empty_form_is_rejected() {
        assert_eq!(validate(&RawInput::default()), Err(ValidationError::Incomplete));
    }

    #[test]
    fn rejection_message_is_user_facing() {
        let message = ValidationError::Incomplete.to_string();
        assert_eq!(message, "Please fill out all the fields to get a prediction.");
    }
}
