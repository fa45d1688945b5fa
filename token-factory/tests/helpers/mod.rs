//! Shared cw-multi-test setup for the token factory integration tests.

#![allow(dead_code)]

use borsh::BorshSerialize;
use cosmwasm_std::{to_json_binary, Addr, Binary, Empty, Uint128};
use cw20::BalanceResponse;
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use common::{ExecutionOutcome, ExecutionStatus};
use token_factory::address_codec::encode_bech32_address;
use token_factory::msg::{ExecuteMsg, InstantiateMsg, LocalAddressResponse, QueryMsg};
use token_factory::{LockResult, MetadataResult};

pub const REMOTE_FACTORY: &str = "factory.bridge.near";
pub const MIN_BLOCK: u64 = 10;
pub const FINALIZED_HEIGHT: u64 = 1_000;
pub const PROOF_HEIGHT: u64 = 500;

// ============================================================================
// Contracts
// ============================================================================

fn contract_factory() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        token_factory::contract::execute,
        token_factory::contract::instantiate,
        token_factory::contract::query,
    )
    .with_reply(token_factory::contract::reply);
    Box::new(contract)
}

fn contract_bridge_token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge_token::contract::execute,
        bridge_token::contract::instantiate,
        bridge_token::contract::query,
    );
    Box::new(contract)
}

fn contract_prover() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_prover::contract::execute,
        mock_prover::contract::instantiate,
        mock_prover::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub factory: Addr,
    pub prover: Addr,
    pub admin: Addr,
    pub pauser: Addr,
    pub user: Addr,
}

pub fn setup() -> Suite {
    let mut app = App::default();

    let admin = Addr::unchecked("terra1admin");
    let pauser = Addr::unchecked("terra1guardian");
    let user = Addr::unchecked("terra1user");

    let prover_code_id = app.store_code(contract_prover());
    let token_code_id = app.store_code(contract_bridge_token());
    let factory_code_id = app.store_code(contract_factory());

    let prover = app
        .instantiate_contract(
            prover_code_id,
            admin.clone(),
            &mock_prover::msg::InstantiateMsg {
                admin: admin.to_string(),
                finalized_height: FINALIZED_HEIGHT,
            },
            &[],
            "mock-prover",
            None,
        )
        .unwrap();

    let factory = app
        .instantiate_contract(
            factory_code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                prover: prover.to_string(),
                remote_factory: REMOTE_FACTORY.to_string(),
                bridge_token_code_id: token_code_id,
                min_block_acceptance_height: MIN_BLOCK,
                address_prefix: "terra".to_string(),
                pausers: vec![pauser.to_string()],
            },
            &[],
            "token-factory",
            Some(admin.to_string()),
        )
        .unwrap();

    Suite {
        app,
        factory,
        prover,
        admin,
        pauser,
        user,
    }
}

impl Suite {
    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.factory.clone(), msg, &[])
    }

    /// Register `remote_token_id` and return the new local token address.
    pub fn register(&mut self, remote_token_id: &str) -> Addr {
        let user = self.user.clone();
        self.execute(
            &user,
            &ExecuteMsg::RegisterNewToken {
                remote_token_id: remote_token_id.to_string(),
            },
        )
        .unwrap();
        self.local_address_of(remote_token_id)
    }

    pub fn local_address_of(&self, remote_token_id: &str) -> Addr {
        let res: LocalAddressResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.factory,
                &QueryMsg::LocalAddressOf {
                    remote_token_id: remote_token_id.to_string(),
                },
            )
            .unwrap();
        res.address
    }

    pub fn deposit(&mut self, proof: Binary, block_height: u64) -> anyhow::Result<AppResponse> {
        let user = self.user.clone();
        self.execute(
            &user,
            &ExecuteMsg::Deposit {
                proof,
                block_height,
            },
        )
    }

    pub fn sync_metadata(
        &mut self,
        proof: Binary,
        block_height: u64,
    ) -> anyhow::Result<AppResponse> {
        let user = self.user.clone();
        self.execute(
            &user,
            &ExecuteMsg::SyncMetadata {
                proof,
                block_height,
            },
        )
    }

    pub fn balance(&self, token: &Addr, address: &str) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &bridge_token::msg::QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance
    }
}

// ============================================================================
// Proofs
// ============================================================================

/// Recipient address a raw 20-byte account maps to on this chain
pub fn local_recipient(raw: [u8; 20]) -> String {
    encode_bech32_address(&raw, "terra").unwrap()
}

pub fn outcome_proof(
    receipt: u8,
    executor_id: &str,
    block_height: u64,
    status: ExecutionStatus,
) -> Binary {
    to_json_binary(&ExecutionOutcome {
        receipt_id: Binary::from(vec![receipt; 32]),
        executor_id: executor_id.to_string(),
        block_height,
        status,
    })
    .unwrap()
}

pub fn success_proof(receipt: u8, block_height: u64, payload: Vec<u8>) -> Binary {
    outcome_proof(
        receipt,
        REMOTE_FACTORY,
        block_height,
        ExecutionStatus::SuccessValue(Binary::from(payload)),
    )
}

pub fn lock_payload(remote_token_id: &str, amount: u128, recipient: [u8; 20]) -> Vec<u8> {
    LockResult {
        remote_token_id: remote_token_id.to_string(),
        amount,
        recipient,
    }
    .try_to_vec()
    .unwrap()
}

pub fn metadata_payload(
    remote_token_id: &str,
    name: &str,
    symbol: &str,
    decimals: u8,
    source_block_height: u64,
) -> Vec<u8> {
    MetadataResult {
        remote_token_id: remote_token_id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals,
        source_block_height,
    }
    .try_to_vec()
    .unwrap()
}

pub fn lock_proof(receipt: u8, remote_token_id: &str, amount: u128, recipient: [u8; 20]) -> Binary {
    success_proof(
        receipt,
        PROOF_HEIGHT,
        lock_payload(remote_token_id, amount, recipient),
    )
}

// ============================================================================
// Responses
// ============================================================================

/// First attribute named `key` across all events
pub fn attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn root_cause(err: anyhow::Error) -> String {
    err.root_cause().to_string()
}
