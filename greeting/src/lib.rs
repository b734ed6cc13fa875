// On-chain greeting store.
// Deployed once with an owner account; serves a default message until
// someone overwrites it. The owner is recorded for provenance only.

use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{env, near, AccountId, PanicOnDefault};
use schemars::JsonSchema;

/// Message every fresh deployment serves before the first write.
const DEFAULT_GREETING: &str = "Building Unstoppable Apps!!!";

/// Combined view returned to clients in one round trip.
#[derive(Serialize, Deserialize, Clone, JsonSchema)]
#[serde(crate = "near_sdk::serde")]
#[schemars(crate = "schemars")]
pub struct ContractInfo {
    #[schemars(with = "String")]
    pub owner: AccountId,
    pub greeting: String,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct GreetingContract {
    owner: AccountId,
    greeting: String,
}

#[near]
impl GreetingContract {
    /// Deploy-time constructor. The owner account is fixed here and never
    /// reassigned afterwards.
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            owner: owner_id,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }

    pub fn get_greeting(&self) -> String {
        self.greeting.clone()
    }

    /// Replace the stored greeting. The value is stored exactly as given,
    /// empty strings included. Open to any caller.
    pub fn set_greeting(&mut self, greeting: String) {
        self.greeting = greeting;
        env::log_str(&format!(
            "GREETING: {} updated the greeting",
            env::predecessor_account_id()
        ));
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner.clone()
    }

    pub fn get_info(&self) -> ContractInfo {
        ContractInfo {
            owner: self.owner.clone(),
            greeting: self.greeting.clone(),
        }
    }
}
