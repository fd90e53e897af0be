use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub const PATIENT_REGISTERED: Symbol = symbol_short!("PAT_REG");
pub const PROVIDER_AUTHORIZED: Symbol = symbol_short!("PRV_AUTH");
pub const PROVIDER_REVOKED: Symbol = symbol_short!("PRV_REV");

/// Event published when a patient registers their record.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub name: String,
    pub timestamp: u64,
}

/// Event published when a patient authorizes a provider, including
/// re-authorization of a provider that already had access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub patient: Address,
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published on every revocation, whether or not the provider held access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRevokedEvent {
    pub patient: Address,
    pub provider: Address,
    pub timestamp: u64,
}

/// Publishes an event when a new patient is registered.
pub fn publish_patient_registered(env: &Env, patient: Address, name: String) {
    let topics = (PATIENT_REGISTERED, patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        name,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider is authorized for a patient.
pub fn publish_provider_authorized(env: &Env, patient: Address, provider: Address) {
    let topics = (PROVIDER_AUTHORIZED, patient.clone(), provider.clone());
    let data = ProviderAuthorizedEvent {
        patient,
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider's access is revoked.
pub fn publish_provider_revoked(env: &Env, patient: Address, provider: Address) {
    let topics = (PROVIDER_REVOKED, patient.clone(), provider.clone());
    let data = ProviderRevokedEvent {
        patient,
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
