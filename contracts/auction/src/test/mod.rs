pub mod withdraw_test;

use crate::{AuctionContract, AuctionContractClient};
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const ASSET_ID: u64 = 7;
pub const FEE_BPS: u32 = 250;

/// Minimal asset registry double: a persistent asset_id -> owner map with
/// the two operations the auction contract depends on.
#[contract]
pub struct MockAssetRegistry;

#[contractimpl]
impl MockAssetRegistry {
    pub fn mint(env: Env, asset_id: u64, owner: Address) {
        env.storage().persistent().set(&asset_id, &owner);
    }

    pub fn owner_of(env: Env, asset_id: u64) -> Address {
        env.storage().persistent().get(&asset_id).unwrap()
    }

    pub fn transfer_from(env: Env, from: Address, to: Address, asset_id: u64) {
        let owner: Address = env.storage().persistent().get(&asset_id).unwrap();
        if owner != from {
            panic!("transfer from non-owner");
        }
        env.storage().persistent().set(&asset_id, &to);
    }
}

pub struct TestContext {
    pub env: Env,
    pub contract: Address,
    pub client: AuctionContractClient<'static>,
    pub beneficiary: Address,
    pub seller: Address,
    pub bidder: Address,
    pub rival: Address,
    pub registry_address: Address,
    pub registry: MockAssetRegistryClient<'static>,
    pub token: token::TokenClient<'static>,
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract);

    let beneficiary = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder = Address::generate(&env);
    let rival = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);
    token_admin_client.mint(&bidder, &1_000_000);
    token_admin_client.mint(&rival, &1_000_000);

    let registry_address = env.register(MockAssetRegistry, ());
    let registry = MockAssetRegistryClient::new(&env, &registry_address);
    registry.mint(&ASSET_ID, &seller);

    client.initialize(&beneficiary, &FEE_BPS, &token_address);

    TestContext {
        env,
        contract,
        client,
        beneficiary,
        seller,
        bidder,
        rival,
        registry_address,
        registry,
        token,
    }
}

/// Auction used by most tests: min bid 100, reserve 200, one hour long.
pub fn create_default_auction(ctx: &TestContext) -> u64 {
    ctx.client.create_auction(
        &ctx.seller,
        &ctx.registry_address,
        &ASSET_ID,
        &100,
        &3600,
        &200,
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}
