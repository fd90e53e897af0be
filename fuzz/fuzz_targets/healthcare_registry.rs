#![no_main]

use arbitrary::Arbitrary;
use healthcare_registry::{
    null_identity, HealthcareRegistryContract, HealthcareRegistryContractClient,
};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

const ACTORS: usize = 6;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Register { caller: u8, name_len: u8 },
    Authorize { caller: u8, provider: u8 },
    Revoke { caller: u8, provider: u8 },
    Read { caller: u8, patient: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HealthcareRegistryContract, ());
    let client = HealthcareRegistryContractClient::new(&env, &contract_id);

    // The last slot is the null identity so every action can hit it.
    let mut actors: Vec<Address> = (0..ACTORS).map(|_| Address::generate(&env)).collect();
    actors.push(null_identity(&env));
    let pick = |i: u8| &actors[i as usize % actors.len()];

    for action in actions {
        match action {
            FuzzAction::Register { caller, name_len } => {
                let name = "a".repeat(name_len as usize % 64);
                let _ = client.try_register_patient(pick(caller), &String::from_str(&env, &name));
            }
            FuzzAction::Authorize { caller, provider } => {
                let _ = client.try_authorize_provider(pick(caller), pick(provider));
            }
            FuzzAction::Revoke { caller, provider } => {
                let _ = client.try_revoke_provider(pick(caller), pick(provider));
            }
            FuzzAction::Read { caller, patient } => {
                let _ = client.try_get_patient_details(pick(caller), pick(patient));
            }
        }
    }

    let null = null_identity(&env);
    assert!(!client.is_registered(&null));
    for patient in &actors {
        let providers = client.get_authorized_providers(patient, patient);
        assert!(!providers.contains(&null));
        for provider in providers.iter() {
            assert!(client.is_provider_authorized(patient, &provider));
            assert!(client.try_get_patient_details(&provider, patient).is_ok());
            assert_eq!(providers.first_index_of(&provider), providers.last_index_of(&provider));
        }
    }
});
