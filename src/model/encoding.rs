//! Deterministic encoding of a customer record into the classifier's
//! feature vector.
//!
//! The classifier was fitted against the exact column order in
//! [`FEATURE_NAMES`]; nothing at runtime can detect a reordered vector, so
//! the artifact loader cross-checks its stored column names against this
//! list and everything downstream indexes by these positions.

use ndarray::Array1;

use crate::model::fields::{Contract, InternetService, PaymentMethod, YesNo};

/// Number of columns the classifier consumes.
pub const FEATURE_COUNT: usize = 13;

/// Fixed, model-defined column order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "tenure",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "Contract",
    "PaperlessBilling",
    "PaymentMethod",
    "MonthlyCharges",
    "TotalCharges",
];

/// Column indexes of the three continuous features, in the order the scaler
/// processes them: tenure, TotalCharges, MonthlyCharges.
pub const SCALED_COLUMNS: [usize; 3] = [3, 12, 11];

/// A fully specified customer, as produced by the validator.
///
/// Every categorical field holds a concrete enum value, so encoding is total
/// and cannot fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CustomerRecord {
    /// Whether the customer is a senior citizen.
    pub senior_citizen: YesNo,
    /// Whether the customer has a partner.
    pub partner: YesNo,
    /// Whether the customer has dependents.
    pub dependents: YesNo,
    /// Months the customer has been with the company.
    pub tenure: u32,
    /// Online security subscription.
    pub online_security: InternetService,
    /// Online backup subscription.
    pub online_backup: InternetService,
    /// Device protection subscription.
    pub device_protection: InternetService,
    /// Tech support subscription.
    pub tech_support: InternetService,
    /// Contract term.
    pub contract: Contract,
    /// Whether billing is paperless.
    pub paperless_billing: YesNo,
    /// How the customer pays.
    pub payment_method: PaymentMethod,
    /// Current monthly charges.
    pub monthly_charges: f64,
    /// Lifetime total charges.
    pub total_charges: f64,
}

/// Encode a record into the fixed-order feature vector.
///
/// Pure: the same record always yields the same vector. Categorical columns
/// take values in {-1, 0, 1, 2, 3, 4}; the three numeric columns pass
/// through unchanged (scaling happens later, see [`crate::model::scaler`]).
pub fn encode(record: &CustomerRecord) -> Array1<f64> {
    Array1::from(vec![
        record.senior_citizen.code(),
        record.partner.code(),
        record.dependents.code(),
        f64::from(record.tenure),
        record.online_security.code(),
        record.online_backup.code(),
        record.device_protection.code(),
        record.tech_support.code(),
        record.contract.code(),
        record.paperless_billing.code(),
        record.payment_method.code(),
        record.monthly_charges,
        record.total_charges,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            senior_citizen: YesNo::Yes,
            partner: YesNo::No,
            dependents: YesNo::No,
            tenure: 12,
            online_security: InternetService::NoInternetService,
            online_backup: InternetService::No,
            device_protection: InternetService::No,
            tech_support: InternetService::No,
            contract: Contract::OneYear,
            paperless_billing: YesNo::Yes,
            payment_method: PaymentMethod::CreditCard,
            monthly_charges: 70.5,
            total_charges: 840.0,
        }
    }

    #[test]
    fn encodes_sample_record_in_fixed_order() {
        let vector = encode(&sample_record());
        let expected = [
            1.0, 0.0, 0.0, 12.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 3.0, 70.5, 840.0,
        ];
        assert_eq!(vector.len(), FEATURE_COUNT);
        assert_eq!(vector.as_slice().unwrap(), &expected);
    }

    #[test]
    fn encoding_is_deterministic() {
        let record = sample_record();
        assert_eq!(encode(&record), encode(&record));
    }

    #[test]
    fn categorical_columns_stay_in_code_range() {
        let record = CustomerRecord {
            senior_citizen: YesNo::No,
            partner: YesNo::Yes,
            dependents: YesNo::Yes,
            tenure: 1,
            online_security: InternetService::Yes,
            online_backup: InternetService::NoInternetService,
            device_protection: InternetService::Yes,
            tech_support: InternetService::NoInternetService,
            contract: Contract::TwoYears,
            paperless_billing: YesNo::No,
            payment_method: PaymentMethod::ElectronicCheck,
            monthly_charges: 19.85,
            total_charges: 19.85,
        };
        let vector = encode(&record);
        for (index, value) in vector.iter().enumerate() {
            if SCALED_COLUMNS.contains(&index) {
                continue;
            }
            assert!(
                [-1.0, 0.0, 1.0, 2.0, 3.0, 4.0].contains(value),
                "column {index} has non-code value {value}"
            );
        }
    }

    #[test]
    fn scaled_column_indexes_name_the_continuous_features() {
        assert_eq!(FEATURE_NAMES[SCALED_COLUMNS[0]], "tenure");
        assert_eq!(FEATURE_NAMES[SCALED_COLUMNS[1]], "TotalCharges");
        assert_eq!(FEATURE_NAMES[SCALED_COLUMNS[2]], "MonthlyCharges");
    }
}
