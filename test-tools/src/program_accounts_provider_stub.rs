use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use epochsnap_core::{
    errors::{CoreError, CoreResult},
    ProgramAccountsProvider,
};
use serde_json::Value;
use solana_sdk::pubkey::Pubkey;

#[derive(Default, Clone)]
pub struct ProgramAccountsProviderStub {
    accounts: HashMap<Pubkey, Vec<Value>>,
    failing_programs: HashSet<Pubkey>,
    fetched_programs: Arc<Mutex<Vec<Pubkey>>>,
}

impl ProgramAccountsProviderStub {
    pub fn add(&mut self, program_id: Pubkey, accounts: Vec<Value>) {
        self.accounts.insert(program_id, accounts);
    }

    /// Makes scans of the given program fail after being recorded.
    pub fn fail_program(&mut self, program_id: Pubkey) {
        self.failing_programs.insert(program_id);
    }

    /// Program ids that were fetched, in call order.
    pub fn fetched_programs(&self) -> Vec<Pubkey> {
        self.fetched_programs.lock().unwrap().clone()
    }

    pub fn invocations(&self) -> usize {
        self.fetched_programs.lock().unwrap().len()
    }
}

#[async_trait]
impl ProgramAccountsProvider for ProgramAccountsProviderStub {
    async fn get_program_accounts_parsed(
        &self,
        program_id: &Pubkey,
    ) -> CoreResult<Vec<Value>> {
        self.fetched_programs.lock().unwrap().push(*program_id);
        if self.failing_programs.contains(program_id) {
            return Err(CoreError::FailedToGetProgramAccountsFromCluster);
        }
        Ok(self.accounts.get(program_id).cloned().unwrap_or_default())
    }
}
