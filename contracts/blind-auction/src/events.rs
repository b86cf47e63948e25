use soroban_sdk::{contractevent, Address};

/// Event emitted when a sealed bid is committed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    pub index: u32,
    pub deposit: i128,
}

/// Event emitted for every slot processed by a reveal
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRevealedEventData {
    #[topic]
    pub bidder: Address,
    pub index: u32,
    pub value: i128,
    pub valid: bool,
}

/// Event emitted when a reveal takes the lead
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBidIncreasedEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted on every withdrawal attempt that moves funds
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEventData {
    #[topic]
    pub recipient: Address,
    pub amount: i128,
    pub success: bool,
}

/// Event emitted when the auction is settled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    pub winner: Option<Address>,
    pub amount: i128,
}
