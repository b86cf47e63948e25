use soroban_sdk::{contracttype, Address, BytesN};

// TTL constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Upper bound on commitments per bidder. `reveal` rewrites the whole record
/// in one invocation, so it has to stay within a single call's budget.
pub const MAX_BIDS_PER_BIDDER: u32 = 16;

/// Where the auction currently sits on its timeline.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionPhase {
    Bidding = 0,
    Reveal = 1,
    /// Reveal window closed, `settle` not yet called.
    AwaitingSettlement = 2,
    Ended = 3,
}

/// Fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub beneficiary: Address,
    pub token: Address,
    pub bidding_end: u64,
    pub reveal_end: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub ended: bool,
}

/// A sealed commitment together with the collateral locked behind it.
///
/// `blinded_bid` is zeroed once the slot has been revealed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub blinded_bid: BytesN<32>,
    pub deposit: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    State,
    Bids(Address),
    PendingReturn(Address),
}
