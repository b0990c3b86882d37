//! Closed field types for the categorical customer attributes.
//!
//! Each field is a closed enum carrying the display label shown in the form
//! and the integer code the classifier was fitted against. The typed path is
//! total: a value that exists can always be encoded. Decoding a free-form
//! label keeps the fallback codes of the original training pipeline
//! (unknown contract labels alias to 2, unknown payment labels to 4) so
//! artifacts fitted against that encoder keep meaning the same thing.

/// Yes/No answer used by the four binary fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YesNo {
    /// Customer has the attribute.
    Yes,
    /// Customer does not have the attribute.
    No,
}

impl YesNo {
    /// Labels offered by the form, in display order.
    pub const LABELS: [&'static str; 2] = ["Yes", "No"];

    /// Display label for this value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Parse a display label; `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    /// Model code: Yes = 1, No = 0.
    pub fn code(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }

    /// Historical encoder behavior: any label other than exactly "Yes"
    /// codes as 0.
    pub fn code_for_label(label: &str) -> f64 {
        if label == "Yes" { 1.0 } else { 0.0 }
    }
}

/// Three-way answer for the internet-dependent service fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InternetService {
    /// Customer subscribes to the service.
    Yes,
    /// Customer has internet but not this service.
    No,
    /// Customer has no internet service at all.
    NoInternetService,
}

impl InternetService {
    /// Labels offered by the form, in display order.
    pub const LABELS: [&'static str; 3] = ["Yes", "No", "No internet service"];

    /// Display label for this value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::NoInternetService => "No internet service",
        }
    }

    /// Parse a display label; `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            "No internet service" => Some(Self::NoInternetService),
            _ => None,
        }
    }

    /// Model code: Yes = 1, No = 0, no internet service = -1.
    pub fn code(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
            Self::NoInternetService => -1.0,
        }
    }

    /// Historical encoder behavior: labels other than "Yes" and "No" all
    /// alias to the no-internet code -1.
    pub fn code_for_label(label: &str) -> f64 {
        match label {
            "Yes" => 1.0,
            "No" => 0.0,
            _ => -1.0,
        }
    }
}

/// Contract term of the customer's plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contract {
    /// Rolling monthly contract.
    MonthToMonth,
    /// Fixed one-year contract.
    OneYear,
    /// Fixed two-year contract.
    TwoYears,
}

impl Contract {
    /// Labels offered by the form, in display order.
    pub const LABELS: [&'static str; 3] = ["Month-to-month", "One year", "Two years"];

    /// Display label for this value.
    pub fn label(self) -> &'static str {
        match self {
            Self::MonthToMonth => "Month-to-month",
            Self::OneYear => "One year",
            Self::TwoYears => "Two years",
        }
    }

    /// Parse a display label; `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Month-to-month" => Some(Self::MonthToMonth),
            "One year" => Some(Self::OneYear),
            "Two years" => Some(Self::TwoYears),
            _ => None,
        }
    }

    /// Model code: Month-to-month = 0, One year = 1, Two years = 2.
    pub fn code(self) -> f64 {
        match self {
            Self::MonthToMonth => 0.0,
            Self::OneYear => 1.0,
            Self::TwoYears => 2.0,
        }
    }

    /// Historical encoder behavior: unrecognized labels fall through the
    /// branch chain and alias to the two-year code 2.
    pub fn code_for_label(label: &str) -> f64 {
        match label {
            "Month-to-month" => 0.0,
            "One year" => 1.0,
            _ => 2.0,
        }
    }
}

/// How the customer pays their bill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Manual electronic check.
    ElectronicCheck,
    /// Mailed paper check.
    MailedCheck,
    /// Automatic bank transfer.
    BankTransfer,
    /// Automatic credit card charge.
    CreditCard,
}

impl PaymentMethod {
    /// Labels offered by the form, in display order.
    pub const LABELS: [&'static str; 4] = [
        "Electronic check",
        "Mailed check",
        "Bank transfer (automatic)",
        "Credit card (automatic)",
    ];

    /// Display label for this value.
    pub fn label(self) -> &'static str {
        match self {
            Self::ElectronicCheck => "Electronic check",
            Self::MailedCheck => "Mailed check",
            Self::BankTransfer => "Bank transfer (automatic)",
            Self::CreditCard => "Credit card (automatic)",
        }
    }

    /// Parse a display label; `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Electronic check" => Some(Self::ElectronicCheck),
            "Mailed check" => Some(Self::MailedCheck),
            "Bank transfer (automatic)" => Some(Self::BankTransfer),
            "Credit card (automatic)" => Some(Self::CreditCard),
            _ => None,
        }
    }

    /// Model code: electronic check = 0, mailed check = 1, bank transfer = 2,
    /// credit card = 3.
    pub fn code(self) -> f64 {
        match self {
            Self::ElectronicCheck => 0.0,
            Self::MailedCheck => 1.0,
            Self::BankTransfer => 2.0,
            Self::CreditCard => 3.0,
        }
    }

    /// Historical encoder behavior: unrecognized labels alias to code 4, a
    /// bucket no real payment method maps to.
    pub fn code_for_label(label: &str) -> f64 {
        match label {
            "Electronic check" => 0.0,
            "Mailed check" => 1.0,
            "Bank transfer (automatic)" => 2.0,
            "Credit card (automatic)" => 3.0,
            _ => 4.0,
        }
    }
}
