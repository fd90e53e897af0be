//! Property-based tests for the authorization set.
//!
//! Invariants tested:
//! - Nothing is authorized for a patient who never registered
//! - A second registration always fails and keeps the first name
//! - Any number of repeated authorizations leaves the provider authorized
//! - Revoking a provider that never had access is a harmless success
//! - The null identity can never enter an authorization set

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};
use healthcare_registry::{
    null_identity, ContractError, HealthcareRegistryContract, HealthcareRegistryContractClient,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, HealthcareRegistryContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthcareRegistryContract, ());
    let client = HealthcareRegistryContractClient::new(&env, &contract_id);

    (env, client)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// Before registration no provider is authorized and self-reads are empty.
    #[test]
    fn prop_no_access_before_registration(n_providers in 1usize..=6usize) {
        let (env, client) = setup();
        let patient = Address::generate(&env);

        for _ in 0..n_providers {
            let provider = Address::generate(&env);
            prop_assert!(!client.is_provider_authorized(&patient, &provider));
        }

        let details = client.get_patient_details(&patient, &patient);
        prop_assert!(!details.registered);
        prop_assert_eq!(details.name.len(), 0);
    }

    /// Re-registration is always rejected and never overwrites the stored name.
    #[test]
    fn prop_reregister_always_rejected(first in "[A-Za-z ]{0,24}", second in "[A-Za-z ]{0,24}") {
        let (env, client) = setup();
        let patient = Address::generate(&env);
        let first = String::from_str(&env, &first);

        client.register_patient(&patient, &first);
        let result = client.try_register_patient(&patient, &String::from_str(&env, &second));

        prop_assert_eq!(result, Err(Ok(ContractError::AlreadyRegistered)));
        prop_assert_eq!(client.get_patient_details(&patient, &patient).name, first);
    }

    /// Authorizing the same provider repeatedly keeps exactly one entry.
    #[test]
    fn prop_repeated_authorization_idempotent(repeats in 1usize..=5usize) {
        let (env, client) = setup();
        let patient = Address::generate(&env);
        let provider = Address::generate(&env);
        client.register_patient(&patient, &String::from_str(&env, "Patient"));

        for _ in 0..repeats {
            client.authorize_provider(&patient, &provider);
            prop_assert!(client.is_provider_authorized(&patient, &provider));
        }

        prop_assert_eq!(client.get_authorized_providers(&patient, &patient).len(), 1);
    }

    /// Revoking a provider that was never authorized succeeds and changes nothing.
    #[test]
    fn prop_revoke_unknown_provider_is_noop(n_authorized in 0usize..=4usize) {
        let (env, client) = setup();
        let patient = Address::generate(&env);
        client.register_patient(&patient, &String::from_str(&env, "Patient"));

        for _ in 0..n_authorized {
            client.authorize_provider(&patient, &Address::generate(&env));
        }
        let before = client.get_authorized_providers(&patient, &patient);

        let unknown = Address::generate(&env);
        prop_assert!(client.try_revoke_provider(&patient, &unknown).is_ok());

        prop_assert!(!client.is_provider_authorized(&patient, &unknown));
        prop_assert_eq!(client.get_authorized_providers(&patient, &patient), before);
    }

    /// The null identity is rejected regardless of how many providers exist.
    #[test]
    fn prop_null_provider_never_inserted(n_authorized in 0usize..=4usize) {
        let (env, client) = setup();
        let patient = Address::generate(&env);
        client.register_patient(&patient, &String::from_str(&env, "Patient"));

        for _ in 0..n_authorized {
            client.authorize_provider(&patient, &Address::generate(&env));
        }

        let null = null_identity(&env);
        let result = client.try_authorize_provider(&patient, &null);

        prop_assert_eq!(result, Err(Ok(ContractError::InvalidProvider)));
        prop_assert!(!client.is_provider_authorized(&patient, &null));
        prop_assert_eq!(
            client.get_authorized_providers(&patient, &patient).len() as usize,
            n_authorized
        );
    }

    /// Grant then revoke toggles read access on and off.
    #[test]
    fn prop_grant_then_revoke_toggles_read(cycles in 1usize..=4usize) {
        let (env, client) = setup();
        let patient = Address::generate(&env);
        let provider = Address::generate(&env);
        client.register_patient(&patient, &String::from_str(&env, "Patient"));

        for _ in 0..cycles {
            client.authorize_provider(&patient, &provider);
            prop_assert!(client.try_get_patient_details(&provider, &patient).is_ok());

            client.revoke_provider(&patient, &provider);
            prop_assert_eq!(
                client.try_get_patient_details(&provider, &patient),
                Err(Ok(ContractError::AccessDenied))
            );
        }
    }
}
