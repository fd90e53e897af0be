#![no_std]
//! Patient-controlled access registry.
//!
//! Patients register a record bound to their own address, then grant or
//! revoke read access for individual providers. Providers can read a record
//! only while they sit in the patient's authorized set. Every mutation is
//! published as a contract event so auditors can replay the authorization
//! history.

pub mod errors;
pub mod events;
pub mod storage;

use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String, Vec};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use events::{PatientRegisteredEvent, ProviderAuthorizedEvent, ProviderRevokedEvent};
pub use storage::{is_null_identity, null_identity, NULL_IDENTITY_STRKEY};

/// A patient's registry entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub owner: Address,
    /// Set once at registration and never changed.
    pub name: String,
    pub registered: bool,
    pub registered_at: u64,
    /// Providers allowed to read this record. Kept free of duplicates.
    pub authorized_providers: Vec<Address>,
}

/// Read projection returned to the patient and their authorized providers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientDetails {
    pub name: String,
    pub registered: bool,
}

impl PatientDetails {
    /// Projection for an address that never registered.
    fn unregistered(env: &Env) -> Self {
        PatientDetails {
            name: String::from_str(env, ""),
            registered: false,
        }
    }
}

impl From<PatientRecord> for PatientDetails {
    fn from(record: PatientRecord) -> Self {
        PatientDetails {
            name: record.name,
            registered: record.registered,
        }
    }
}

/// Logs a rejected call and hands the error back for propagation.
fn reject(env: &Env, error: ContractError, caller: &Address, subject: &Address) -> ContractError {
    log!(
        env,
        "registry call rejected",
        error as u32,
        caller.clone(),
        subject.clone()
    );
    error
}

#[contract]
pub struct HealthcareRegistryContract;

#[contractimpl]
impl HealthcareRegistryContract {
    /// Register the caller as a patient under the given display name.
    /// The name is stored as given; an empty name is accepted.
    pub fn register_patient(env: Env, caller: Address, name: String) -> Result<(), ContractError> {
        caller.require_auth();

        if is_null_identity(&env, &caller) {
            return Err(reject(&env, ContractError::InvalidPatient, &caller, &caller));
        }
        if storage::has_patient(&env, &caller) {
            return Err(reject(
                &env,
                ContractError::AlreadyRegistered,
                &caller,
                &caller,
            ));
        }

        let record = PatientRecord {
            owner: caller.clone(),
            name: name.clone(),
            registered: true,
            registered_at: env.ledger().timestamp(),
            authorized_providers: Vec::new(&env),
        };
        storage::set_patient(&env, &record);
        storage::increment_patient_count(&env);

        events::publish_patient_registered(&env, caller, name);

        Ok(())
    }

    /// Grant `provider` read access to the caller's record.
    /// Authorizing a provider that already has access succeeds and is
    /// announced again.
    pub fn authorize_provider(
        env: Env,
        caller: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut record = storage::get_patient(&env, &caller)
            .ok_or_else(|| reject(&env, ContractError::NotRegistered, &caller, &provider))?;

        if is_null_identity(&env, &provider) {
            return Err(reject(
                &env,
                ContractError::InvalidProvider,
                &caller,
                &provider,
            ));
        }

        if !record.authorized_providers.contains(&provider) {
            record.authorized_providers.push_back(provider.clone());
            storage::set_patient(&env, &record);
        }

        events::publish_provider_authorized(&env, caller, provider);

        Ok(())
    }

    /// Withdraw `provider`'s read access to the caller's record.
    ///
    /// Revoking a provider that holds no access, or revoking from an address
    /// that never registered, is a successful no-op. The revocation event is
    /// published in every case.
    pub fn revoke_provider(
        env: Env,
        caller: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if let Some(mut record) = storage::get_patient(&env, &caller) {
            if let Some(index) = record.authorized_providers.first_index_of(&provider) {
                record.authorized_providers.remove(index);
                storage::set_patient(&env, &record);
            }
        }

        events::publish_provider_revoked(&env, caller, provider);

        Ok(())
    }

    /// Read a patient's details.
    ///
    /// Only the patient and their currently authorized providers may read.
    /// The access rule is evaluated before the record is looked up, so an
    /// unauthorized caller is denied even for an address with no record,
    /// while the patient reading their own missing record gets an empty,
    /// unregistered projection.
    pub fn get_patient_details(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<PatientDetails, ContractError> {
        caller.require_auth();

        let record = storage::get_patient(&env, &patient);
        let permitted = caller == patient
            || record
                .as_ref()
                .is_some_and(|r| r.authorized_providers.contains(&caller));

        if !permitted {
            return Err(reject(&env, ContractError::AccessDenied, &caller, &patient));
        }

        Ok(record
            .map(PatientDetails::from)
            .unwrap_or_else(|| PatientDetails::unregistered(&env)))
    }

    /// Check whether `provider` may currently read `patient`'s record.
    /// Open to any caller; unknown patients report `false`.
    pub fn is_provider_authorized(env: Env, patient: Address, provider: Address) -> bool {
        storage::get_patient(&env, &patient)
            .is_some_and(|r| r.authorized_providers.contains(&provider))
    }

    /// List the providers authorized for a patient, in the order they were
    /// first authorized. Only the patient may enumerate their own set.
    pub fn get_authorized_providers(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<Address>, ContractError> {
        caller.require_auth();

        if caller != patient {
            return Err(reject(&env, ContractError::AccessDenied, &caller, &patient));
        }

        Ok(storage::get_patient(&env, &patient)
            .map(|r| r.authorized_providers)
            .unwrap_or_else(|| Vec::new(&env)))
    }

    /// Check whether an address has registered a patient record.
    pub fn is_registered(env: Env, patient: Address) -> bool {
        storage::has_patient(&env, &patient)
    }

    /// Get the number of registered patients.
    pub fn get_patient_count(env: Env) -> u64 {
        storage::get_patient_count(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
