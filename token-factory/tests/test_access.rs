//! Pause control, pauser roles, config updates and admin transfer.

mod helpers;

use cosmwasm_std::{Addr, Uint128};

use helpers::{
    attr, local_recipient, lock_proof, metadata_payload, root_cause, setup, success_proof,
    PROOF_HEIGHT,
};
use token_factory::msg::{
    ConfigResponse, ExecuteMsg, IsManagedTokenResponse, PausersResponse, PendingAdminResponse,
    QueryMsg,
};

const RAW_HOLDER: [u8; 20] = [0x33; 20];

fn config(suite: &helpers::Suite) -> ConfigResponse {
    suite
        .app
        .wrap()
        .query_wasm_smart(&suite.factory, &QueryMsg::Config {})
        .unwrap()
}

#[test]
fn test_pause_blocks_bridge_operations() {
    let mut suite = setup();
    let token = suite.register("near.token.x");
    suite
        .deposit(lock_proof(1, "near.token.x", 1000, RAW_HOLDER), PROOF_HEIGHT)
        .unwrap();
    let holder = Addr::unchecked(local_recipient(RAW_HOLDER));

    let pauser = suite.pauser.clone();
    let res = suite.execute(&pauser, &ExecuteMsg::Pause {}).unwrap();
    assert_eq!(attr(&res, "action"), Some("pause".to_string()));
    assert!(config(&suite).paused);

    let err = suite
        .deposit(lock_proof(2, "near.token.x", 5, RAW_HOLDER), PROOF_HEIGHT)
        .unwrap_err();
    assert!(root_cause(err).contains("System is paused"));

    let err = suite
        .execute(
            &holder,
            &ExecuteMsg::Withdraw {
                token: token.to_string(),
                amount: Uint128::new(10),
                recipient: "alice.near".to_string(),
            },
        )
        .unwrap_err();
    assert!(root_cause(err).contains("System is paused"));

    let proof = success_proof(
        3,
        PROOF_HEIGHT,
        metadata_payload("near.token.x", "Token X", "TKX", 18, 200),
    );
    let err = suite.sync_metadata(proof, PROOF_HEIGHT).unwrap_err();
    assert!(root_cause(err).contains("System is paused"));

    // Reads keep working and state is untouched
    let managed: IsManagedTokenResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.factory,
            &QueryMsg::IsManagedToken {
                address: token.to_string(),
            },
        )
        .unwrap();
    assert!(managed.is_managed);
    assert_eq!(suite.balance(&token, holder.as_str()), Uint128::new(1000));

    suite.execute(&pauser, &ExecuteMsg::Unpause {}).unwrap();
    suite
        .deposit(lock_proof(2, "near.token.x", 5, RAW_HOLDER), PROOF_HEIGHT)
        .unwrap();
    assert_eq!(suite.balance(&token, holder.as_str()), Uint128::new(1005));
}

#[test]
fn test_registration_allowed_while_paused() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    suite.execute(&admin, &ExecuteMsg::Pause {}).unwrap();

    let token = suite.register("near.token.x");
    assert_eq!(suite.local_address_of("near.token.x"), token);
}

#[test]
fn test_pause_requires_pauser_role() {
    let mut suite = setup();
    let user = suite.user.clone();
    let admin = suite.admin.clone();

    let err = suite.execute(&user, &ExecuteMsg::Pause {}).unwrap_err();
    assert!(root_cause(err).contains("pauser role"));
    assert!(!config(&suite).paused);

    suite
        .execute(
            &admin,
            &ExecuteMsg::AddPauser {
                address: user.to_string(),
            },
        )
        .unwrap();
    suite.execute(&user, &ExecuteMsg::Pause {}).unwrap();
    assert!(config(&suite).paused);

    suite
        .execute(
            &admin,
            &ExecuteMsg::RemovePauser {
                address: user.to_string(),
            },
        )
        .unwrap();
    let err = suite.execute(&user, &ExecuteMsg::Unpause {}).unwrap_err();
    assert!(root_cause(err).contains("pauser role"));

    let pausers: PausersResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.factory, &QueryMsg::Pausers {})
        .unwrap();
    assert_eq!(pausers.pausers, vec![admin, suite.pauser.clone()]);
}

#[test]
fn test_admin_operations_require_admin() {
    let mut suite = setup();
    let pauser = suite.pauser.clone();

    for msg in [
        ExecuteMsg::AddPauser {
            address: "terra1other".to_string(),
        },
        ExecuteMsg::UpdateConfig {
            prover: None,
            remote_factory: Some("evil.near".to_string()),
            bridge_token_code_id: None,
            min_block_acceptance_height: None,
        },
        ExecuteMsg::ProposeAdmin {
            new_admin: pauser.to_string(),
        },
    ] {
        let err = suite.execute(&pauser, &msg).unwrap_err();
        assert!(root_cause(err).contains("only admin"));
    }
    assert_eq!(config(&suite).remote_factory, "factory.bridge.near");
}

#[test]
fn test_update_config() {
    let mut suite = setup();
    let admin = suite.admin.clone();

    suite
        .execute(
            &admin,
            &ExecuteMsg::UpdateConfig {
                prover: None,
                remote_factory: None,
                bridge_token_code_id: None,
                min_block_acceptance_height: Some(600),
            },
        )
        .unwrap();
    assert_eq!(config(&suite).min_block_acceptance_height, 600);

    suite.register("near.token.x");
    let err = suite
        .deposit(lock_proof(1, "near.token.x", 5, RAW_HOLDER), PROOF_HEIGHT)
        .unwrap_err();
    assert!(root_cause(err).contains("below the minimum acceptance height"));
}

#[test]
fn test_admin_transfer_with_timelock() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let new_admin = Addr::unchecked("terra1newadmin");

    let err = suite
        .execute(&new_admin, &ExecuteMsg::AcceptAdmin {})
        .unwrap_err();
    assert!(root_cause(err).contains("No pending admin"));

    suite
        .execute(
            &admin,
            &ExecuteMsg::ProposeAdmin {
                new_admin: new_admin.to_string(),
            },
        )
        .unwrap();
    let pending: Option<PendingAdminResponse> = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.factory, &QueryMsg::PendingAdmin {})
        .unwrap();
    assert_eq!(pending.unwrap().new_address, new_admin);

    let err = suite
        .execute(&new_admin, &ExecuteMsg::AcceptAdmin {})
        .unwrap_err();
    assert!(root_cause(err).contains("Timelock not expired"));

    let user = suite.user.clone();
    let err = suite.execute(&user, &ExecuteMsg::AcceptAdmin {}).unwrap_err();
    assert!(root_cause(err).contains("only pending admin"));

    suite
        .app
        .update_block(|block| block.time = block.time.plus_seconds(604_800));
    suite
        .execute(&new_admin, &ExecuteMsg::AcceptAdmin {})
        .unwrap();
    assert_eq!(config(&suite).admin, new_admin);

    let err = suite
        .execute(
            &admin,
            &ExecuteMsg::AddPauser {
                address: "terra1other".to_string(),
            },
        )
        .unwrap_err();
    assert!(root_cause(err).contains("only admin"));

    let pausers: PausersResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.factory, &QueryMsg::Pausers {})
        .unwrap();
    assert_eq!(pausers.pausers, vec![suite.pauser.clone(), new_admin.clone()]);

    let err = suite.execute(&admin, &ExecuteMsg::Pause {}).unwrap_err();
    assert!(root_cause(err).contains("pauser role"));
    suite.execute(&new_admin, &ExecuteMsg::Pause {}).unwrap();
    assert!(config(&suite).paused);
}

#[test]
fn test_cancel_admin_proposal() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let new_admin = Addr::unchecked("terra1newadmin");

    suite
        .execute(
            &admin,
            &ExecuteMsg::ProposeAdmin {
                new_admin: new_admin.to_string(),
            },
        )
        .unwrap();
    suite
        .execute(&admin, &ExecuteMsg::CancelAdminProposal {})
        .unwrap();

    let pending: Option<PendingAdminResponse> = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.factory, &QueryMsg::PendingAdmin {})
        .unwrap();
    assert!(pending.is_none());
}
