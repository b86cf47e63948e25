use soroban_sdk::contracterror;

/// Error codes for the blind auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Called before the operation's window opened
    TooEarly = 1,
    /// Called after the operation's window closed
    TooLate = 2,
    /// Auction has already been settled
    AlreadyEnded = 3,
    /// Reveal arrays do not match the caller's bid count
    LengthMismatch = 4,
    /// Bidding or reveal window is zero or overflows the ledger clock
    InvalidDuration = 5,
    /// Deposit must be positive
    InvalidDeposit = 6,
    /// Bidder already holds the maximum number of commitments
    TooManyBids = 7,
}
