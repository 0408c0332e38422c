//! Tests for the Distributor contract

use odra::casper_types::{U256, U512};
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::{Address, Addressable};

use crate::distribution::distributor::{Distributor, DistributorHostRef};
use crate::distribution::errors::DistributorError;
use crate::distribution::events::{Deposit, NewOperator, NewToken, OwnershipTransferred};
use crate::token::{Token, TokenHostRef, TokenInitArgs};

const CSPR_POOL: u64 = 100;
const TOKEN_POOL: u64 = 10_000;

fn deploy_token(env: &HostEnv, name: &str, symbol: &str) -> TokenHostRef {
    Token::deploy(
        env,
        TokenInitArgs {
            name: String::from(name),
            symbol: String::from(symbol),
            decimals: 18,
        },
    )
}

/// Deploys a distributor funded with 100 CSPR and 10 000 token units
fn setup() -> (HostEnv, DistributorHostRef, TokenHostRef) {
    let env = odra_test::env();
    let distributor = Distributor::deploy(&env, NoArgs);
    let mut token = deploy_token(&env, "Token", "TKN");

    distributor.with_tokens(U512::from(CSPR_POOL)).deposit();
    token.mint(distributor.address().clone(), U256::from(TOKEN_POOL));

    (env, distributor, token)
}

fn recipients(env: &HostEnv) -> Vec<Address> {
    vec![
        env.get_account(1),
        env.get_account(2),
        env.get_account(3),
        env.get_account(4),
    ]
}

#[test]
fn test_funded_pool_balances() {
    let (env, distributor, token) = setup();
    let owner = env.get_account(0);

    assert_eq!(
        token.balance_of(distributor.address().clone()),
        U256::from(TOKEN_POOL)
    );
    assert_eq!(env.balance_of(&distributor), U512::from(CSPR_POOL));
    assert_eq!(distributor.cspr_balance(), U512::from(CSPR_POOL));
    assert_eq!(distributor.owner(), owner);
    assert_eq!(distributor.operator(), None);
    assert_eq!(distributor.token(), None);
    assert!(env.emitted_event(
        &distributor,
        &Deposit {
            from: owner,
            amount: U512::from(CSPR_POOL),
        }
    ));
}

#[test]
fn test_batch_rejects_length_mismatch() {
    let (env, mut distributor, token) = setup();
    let to = recipients(&env);
    let user1 = env.get_account(1);
    let user1_cspr_before = env.balance_of(&user1);

    assert_eq!(
        distributor.try_batch_transfer_token(
            to.clone(),
            vec![U256::from(1000), U256::from(1000), U256::from(1000)],
            token.address().clone(),
        ),
        Err(DistributorError::LengthMismatch.into())
    );

    assert_eq!(
        distributor.try_batch_transfer_cspr(
            to,
            vec![U512::from(10), U512::from(10), U512::from(10)],
        ),
        Err(DistributorError::LengthMismatch.into())
    );

    // No side effects anywhere
    assert_eq!(
        token.balance_of(distributor.address().clone()),
        U256::from(TOKEN_POOL)
    );
    assert_eq!(token.balance_of(user1), U256::zero());
    assert_eq!(env.balance_of(&distributor), U512::from(CSPR_POOL));
    assert_eq!(env.balance_of(&user1), user1_cspr_before);
}

#[test]
fn test_batch_rejects_insufficient_balance() {
    let (env, mut distributor, token) = setup();
    let to = recipients(&env);
    let user1 = env.get_account(1);
    let user1_cspr_before = env.balance_of(&user1);

    assert_eq!(
        distributor.try_batch_transfer_token(
            to.clone(),
            vec![U256::from(TOKEN_POOL); 4],
            token.address().clone(),
        ),
        Err(DistributorError::InsufficientBalance.into())
    );

    assert_eq!(
        distributor.try_batch_transfer_cspr(to, vec![U512::from(CSPR_POOL); 4]),
        Err(DistributorError::InsufficientBalance.into())
    );

    assert_eq!(
        token.balance_of(distributor.address().clone()),
        U256::from(TOKEN_POOL)
    );
    assert_eq!(token.balance_of(user1), U256::zero());
    assert_eq!(env.balance_of(&distributor), U512::from(CSPR_POOL));
    assert_eq!(env.balance_of(&user1), user1_cspr_before);
}

#[test]
fn test_batch_transfer_token_pays_each_recipient() {
    let (env, mut distributor, token) = setup();
    let to = recipients(&env);

    distributor.batch_transfer_token(
        to.clone(),
        vec![U256::from(1000); 4],
        token.address().clone(),
    );

    for user in &to {
        assert_eq!(token.balance_of(*user), U256::from(1000));
    }
    assert_eq!(
        token.balance_of(distributor.address().clone()),
        U256::from(6000)
    );
}

#[test]
fn test_batch_transfer_cspr_pays_each_recipient() {
    let (env, mut distributor, _token) = setup();
    let to = recipients(&env);
    let before: Vec<U512> = to.iter().map(|user| env.balance_of(user)).collect();

    distributor.batch_transfer_cspr(to.clone(), vec![U512::from(10); 4]);

    for (user, balance_before) in to.iter().zip(before.iter()) {
        assert_eq!(env.balance_of(user), *balance_before + U512::from(10));
    }
    assert_eq!(env.balance_of(&distributor), U512::from(60));
}

#[test]
fn test_cspr_batch_conserves_value() {
    let (env, mut distributor, _token) = setup();
    let to = recipients(&env);
    let amounts = vec![
        U512::from(5),
        U512::from(7),
        U512::from(11),
        U512::from(13),
    ];
    let before: Vec<U512> = to.iter().map(|user| env.balance_of(user)).collect();
    let pool_before = env.balance_of(&distributor);

    distributor.batch_transfer_cspr(to.clone(), amounts);

    let paid_out: U512 = to
        .iter()
        .zip(before.iter())
        .map(|(user, balance_before)| env.balance_of(user) - *balance_before)
        .fold(U512::zero(), |acc, delta| acc + delta);
    assert_eq!(paid_out, pool_before - env.balance_of(&distributor));
    assert_eq!(paid_out, U512::from(36));
}

#[test]
fn test_withdraw_cspr_sweeps_pool_once() {
    let (env, mut distributor, _token) = setup();
    let owner = env.get_account(0);
    let owner_before = env.balance_of(&owner);

    distributor.withdraw_cspr();

    assert_eq!(env.balance_of(&distributor), U512::zero());
    assert_eq!(env.balance_of(&owner), owner_before + U512::from(CSPR_POOL));

    assert_eq!(
        distributor.try_withdraw_cspr(),
        Err(DistributorError::InsufficientBalance.into())
    );
}

#[test]
fn test_withdraw_token_requires_configuration() {
    let (env, mut distributor, token) = setup();
    let owner = env.get_account(0);
    let other_token = deploy_token(&env, "Other Token", "OTK");

    assert_eq!(
        distributor.try_withdraw_token(None),
        Err(DistributorError::ZeroAddress.into())
    );

    assert_eq!(
        distributor.try_withdraw_token(Some(other_token.address().clone())),
        Err(DistributorError::TokenNotSet.into())
    );

    distributor.set_token(Some(token.address().clone()));
    distributor.withdraw_token(Some(token.address().clone()));

    assert_eq!(token.balance_of(owner), U256::from(TOKEN_POOL));
    assert_eq!(
        token.balance_of(distributor.address().clone()),
        U256::zero()
    );

    assert_eq!(
        distributor.try_withdraw_token(Some(token.address().clone())),
        Err(DistributorError::InsufficientBalance.into())
    );
}

#[test]
fn test_set_operator_rules() {
    let (env, mut distributor, _token) = setup();
    let owner = env.get_account(0);
    let operator = env.get_account(5);

    assert_eq!(
        distributor.try_set_operator(None),
        Err(DistributorError::ZeroAddress.into())
    );

    assert_eq!(
        distributor.try_set_operator(Some(owner)),
        Err(DistributorError::NoOpChange.into())
    );

    distributor.set_operator(Some(operator));
    assert_eq!(distributor.operator(), Some(operator));
    assert!(env.emitted_event(&distributor, &NewOperator { operator }));

    assert_eq!(
        distributor.try_set_operator(Some(operator)),
        Err(DistributorError::NoOpChange.into())
    );
}

#[test]
fn test_set_token_reconfiguration() {
    let (env, mut distributor, token) = setup();
    let second_token = deploy_token(&env, "Second Token", "TK2");

    assert_eq!(
        distributor.try_set_token(None),
        Err(DistributorError::ZeroAddress.into())
    );

    distributor.set_token(Some(token.address().clone()));
    assert_eq!(distributor.token(), Some(token.address().clone()));
    assert!(env.emitted_event(
        &distributor,
        &NewToken {
            token: token.address().clone(),
        }
    ));

    assert_eq!(
        distributor.try_set_token(Some(token.address().clone())),
        Err(DistributorError::NoOpChange.into())
    );

    distributor.set_token(Some(second_token.address().clone()));
    assert_eq!(distributor.token(), Some(second_token.address().clone()));

    // The restricted withdrawal path follows the configured reference
    assert_eq!(
        distributor.try_withdraw_token(Some(token.address().clone())),
        Err(DistributorError::TokenNotSet.into())
    );
}

#[test]
fn test_operator_can_disburse_but_not_sweep() {
    let (env, mut distributor, token) = setup();
    let operator = env.get_account(5);
    let to = recipients(&env);

    distributor.set_operator(Some(operator));
    distributor.set_token(Some(token.address().clone()));

    env.set_caller(operator);
    distributor.batch_transfer_cspr(to.clone(), vec![U512::from(10); 4]);
    distributor.batch_transfer_token(to, vec![U256::from(1000); 4], token.address().clone());
    assert_eq!(env.balance_of(&distributor), U512::from(60));

    assert_eq!(
        distributor.try_withdraw_cspr(),
        Err(DistributorError::Unauthorized.into())
    );
    assert_eq!(
        distributor.try_withdraw_token(Some(token.address().clone())),
        Err(DistributorError::Unauthorized.into())
    );
    assert_eq!(
        distributor.try_set_token(Some(token.address().clone())),
        Err(DistributorError::Unauthorized.into())
    );
    assert_eq!(
        distributor.try_set_operator(Some(env.get_account(6))),
        Err(DistributorError::Unauthorized.into())
    );
}

#[test]
fn test_stranger_cannot_touch_pool() {
    let (env, mut distributor, token) = setup();
    let stranger = env.get_account(6);
    let to = recipients(&env);

    env.set_caller(stranger);
    assert_eq!(
        distributor.try_batch_transfer_cspr(to.clone(), vec![U512::from(1); 4]),
        Err(DistributorError::Unauthorized.into())
    );
    assert_eq!(
        distributor.try_batch_transfer_token(
            to,
            vec![U256::from(1); 4],
            token.address().clone(),
        ),
        Err(DistributorError::Unauthorized.into())
    );
    assert_eq!(
        distributor.try_withdraw_cspr(),
        Err(DistributorError::Unauthorized.into())
    );
}

#[test]
fn test_transfer_ownership() {
    let (env, mut distributor, _token) = setup();
    let owner = env.get_account(0);
    let new_owner = env.get_account(7);

    assert_eq!(
        distributor.try_transfer_ownership(owner),
        Err(DistributorError::NoOpChange.into())
    );

    distributor.transfer_ownership(new_owner);
    assert_eq!(distributor.owner(), new_owner);
    assert!(env.emitted_event(
        &distributor,
        &OwnershipTransferred {
            previous_owner: owner,
            new_owner,
        }
    ));

    // The previous owner lost its rights, the new one can sweep
    assert_eq!(
        distributor.try_withdraw_cspr(),
        Err(DistributorError::Unauthorized.into())
    );

    env.set_caller(new_owner);
    let new_owner_before = env.balance_of(&new_owner);
    distributor.withdraw_cspr();
    assert_eq!(
        env.balance_of(&new_owner),
        new_owner_before + U512::from(CSPR_POOL)
    );
}
