use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::PatientRecord;

const PATIENT: Symbol = symbol_short!("PATIENT");
const PATIENT_COUNT: Symbol = symbol_short!("PAT_CNT");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Strkey of the all-zero ed25519 account. No key pair signs for it, so it
/// stands in for "no identity" wherever an address is required.
pub const NULL_IDENTITY_STRKEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

fn patient_key(patient: &Address) -> (Symbol, Address) {
    (PATIENT, patient.clone())
}

/// Extends the TTL of a patient record so it stays live on the ledger.
fn extend_ttl_patient_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL for instance storage (applies to all instance keys).
fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn null_identity(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_IDENTITY_STRKEY))
}

pub fn is_null_identity(env: &Env, identity: &Address) -> bool {
    *identity == null_identity(env)
}

pub fn has_patient(env: &Env, patient: &Address) -> bool {
    env.storage().persistent().has(&patient_key(patient))
}

pub fn get_patient(env: &Env, patient: &Address) -> Option<PatientRecord> {
    env.storage().persistent().get(&patient_key(patient))
}

pub fn set_patient(env: &Env, record: &PatientRecord) {
    let key = patient_key(&record.owner);
    env.storage().persistent().set(&key, record);
    extend_ttl_patient_key(env, &key);
}

pub fn get_patient_count(env: &Env) -> u64 {
    env.storage().instance().get(&PATIENT_COUNT).unwrap_or(0)
}

pub fn increment_patient_count(env: &Env) {
    let count = get_patient_count(env).saturating_add(1);
    env.storage().instance().set(&PATIENT_COUNT, &count);
    extend_ttl_instance(env);
}
