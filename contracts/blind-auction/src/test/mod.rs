
use crate::{BlindAuction, BlindAuctionClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events, Ledger, LedgerInfo},
    token, Address, BytesN, Env, Event, Val, Vec,
};

pub const START_TIME: u64 = 1_000;
pub const BIDDING_TIME: u64 = 3_600;
pub const REVEAL_TIME: u64 = 1_800;

pub fn setup_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: START_TIME,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3_110_400,
    });

    env
}

/// Deploy the auction against a real Stellar asset and fund two bidders.
pub fn setup_test() -> (
    Env,
    BlindAuctionClient<'static>,
    Address,
    token::TokenClient<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = setup_env();

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    let beneficiary = Address::generate(&env);
    let contract_id = env.register(
        BlindAuction,
        (
            beneficiary.clone(),
            token_address.clone(),
            BIDDING_TIME,
            REVEAL_TIME,
        ),
    );
    let client = BlindAuctionClient::new(&env, &contract_id);

    (env, client, beneficiary, token_client, token_admin_client)
}

/// Deploy the auction against [`MockToken`], whose transfers can be made to fail.
pub fn setup_with_mock_token() -> (
    Env,
    BlindAuctionClient<'static>,
    Address,
    MockTokenClient<'static>,
) {
    let env = setup_env();

    let token_id = env.register(MockToken, ());
    let token = MockTokenClient::new(&env, &token_id);

    let beneficiary = Address::generate(&env);
    let contract_id = env.register(
        BlindAuction,
        (beneficiary.clone(), token_id, BIDDING_TIME, REVEAL_TIME),
    );
    let client = BlindAuctionClient::new(&env, &contract_id);

    (env, client, beneficiary, token)
}

pub fn funded_bidder(env: &Env, token_admin: &token::StellarAssetClient, amount: i128) -> Address {
    let bidder = Address::generate(env);
    token_admin.mint(&bidder, &amount);
    bidder
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}

pub fn secret(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

/// Commit `value` sealed under `secret(seed)` with `deposit` locked.
pub fn commit(
    env: &Env,
    client: &BlindAuctionClient,
    bidder: &Address,
    value: i128,
    seed: u8,
    deposit: i128,
) -> u32 {
    let blinded_bid = client.compute_commitment(&value, &secret(env, seed));
    client.bid(bidder, &blinded_bid, &deposit)
}

/// Build reveal arguments from `(value, seed)` openings.
pub fn openings(env: &Env, items: &[(i128, u8)]) -> (Vec<i128>, Vec<BytesN<32>>) {
    let mut values = Vec::new(env);
    let mut secrets = Vec::new(env);
    for (value, seed) in items {
        values.push_back(*value);
        secrets.push_back(secret(env, *seed));
    }
    (values, secrets)
}

pub fn reveal(env: &Env, client: &BlindAuctionClient, bidder: &Address, items: &[(i128, u8)]) {
    let (values, secrets) = openings(env, items);
    client.reveal(bidder, &values, &secrets);
}

/// Events published by `contract` during the last invocation, in order.
pub fn contract_events(env: &Env, contract: &Address) -> Vec<(Vec<Val>, Val)> {
    let mut events = Vec::new(env);
    for (emitter, topics, data) in env.events().all().iter() {
        if emitter == *contract {
            events.push_back((topics, data));
        }
    }
    events
}

/// Topics and data `event` publishes, for comparison with [`contract_events`].
pub fn expected_event(env: &Env, event: &impl Event) -> (Vec<Val>, Val) {
    (event.topics(env), event.data(env))
}

// ─── mock token ─────────────────────────────────────────────────────────────

#[contracttype]
enum MockTokenKey {
    Balance(Address),
    Failing,
}

/// Minimal token exposing `transfer` with a switch to reject every transfer.
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&MockTokenKey::Balance(to), &(balance + amount));
    }

    pub fn set_failing(env: Env, failing: bool) {
        env.storage().instance().set(&MockTokenKey::Failing, &failing);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockTokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        let failing: bool = env
            .storage()
            .instance()
            .get(&MockTokenKey::Failing)
            .unwrap_or(false);
        if failing {
            panic!("transfer rejected");
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage()
            .instance()
            .set(&MockTokenKey::Balance(from), &(from_balance - amount));

        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&MockTokenKey::Balance(to), &(to_balance + amount));
    }
}
