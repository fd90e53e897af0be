use soroban_sdk::{contracterror, contracttype};

/// Error categories for classifying registry failures.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: an identity argument that can never be a participant
    Validation = 1,
    /// Authorization errors: the caller may not read the requested record
    Authorization = 2,
    /// Not found errors: the caller has no patient record
    NotFound = 3,
    /// State conflict errors: duplicate registrations
    StateConflict = 4,
}

/// Error severity levels indicating the impact of a failure.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Caller misuse with no security relevance
    Low = 1,
    /// Rejected access attempt worth surfacing to auditors
    Medium = 2,
}

/// Registry errors. Codes are part of the contract interface and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyRegistered = 1,
    NotRegistered = 2,
    InvalidProvider = 3,
    AccessDenied = 4,
    InvalidPatient = 5,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidProvider | ContractError::InvalidPatient => {
                ErrorCategory::Validation
            }
            ContractError::AccessDenied => ErrorCategory::Authorization,
            ContractError::NotRegistered => ErrorCategory::NotFound,
            ContractError::AlreadyRegistered => ErrorCategory::StateConflict,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::AccessDenied => ErrorSeverity::Medium,
            ContractError::AlreadyRegistered
            | ContractError::NotRegistered
            | ContractError::InvalidProvider
            | ContractError::InvalidPatient => ErrorSeverity::Low,
        }
    }

    /// Every registry failure stems from a violated precondition, so retrying
    /// the same call can never succeed.
    pub fn retryable(&self) -> bool {
        false
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::AlreadyRegistered => "Patient already registered",
            ContractError::NotRegistered => "Patient not registered",
            ContractError::InvalidProvider => "Invalid provider address",
            ContractError::AccessDenied => "Not authorized to access this patient's data",
            ContractError::InvalidPatient => "Invalid patient address",
        }
    }
}
