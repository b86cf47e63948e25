use crate::types::{
    AuctionConfig, AuctionState, Bid, DataKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env, Vec};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Config ==========

pub fn get_config(env: &Env) -> AuctionConfig {
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ========== Auction State ==========

pub fn get_state(env: &Env) -> AuctionState {
    env.storage().instance().get(&DataKey::State).unwrap()
}

pub fn set_state(env: &Env, state: &AuctionState) {
    env.storage().instance().set(&DataKey::State, state);
}

// ========== Bids ==========

pub fn get_bids(env: &Env, bidder: &Address) -> Vec<Bid> {
    let key = DataKey::Bids(bidder.clone());
    let bids = env.storage().persistent().get::<_, Vec<Bid>>(&key);
    match bids {
        Some(bids) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            bids
        }
        None => Vec::new(env),
    }
}

pub fn set_bids(env: &Env, bidder: &Address, bids: &Vec<Bid>) {
    let key = DataKey::Bids(bidder.clone());
    env.storage().persistent().set(&key, bids);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Appends to the bidder's record and returns the new bid's index.
pub fn add_bid(env: &Env, bidder: &Address, bid: Bid) -> u32 {
    let mut bids = get_bids(env, bidder);
    bids.push_back(bid);
    set_bids(env, bidder, &bids);
    bids.len() - 1
}

// ========== Pending Returns ==========

pub fn get_pending_return(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::PendingReturn(owner.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key);
    if amount.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    amount.unwrap_or(0)
}

pub fn set_pending_return(env: &Env, owner: &Address, amount: i128) {
    let key = DataKey::PendingReturn(owner.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn credit_pending_return(env: &Env, owner: &Address, amount: i128) {
    let balance = get_pending_return(env, owner) + amount;
    set_pending_return(env, owner, balance);
}

pub fn remove_pending_return(env: &Env, owner: &Address) {
    let key = DataKey::PendingReturn(owner.clone());
    env.storage().persistent().remove(&key);
}
