#![no_std]

//! # Blind Auction Contract
//!
//! Soroban smart contract implementing a commit-reveal ("blind") auction.
//!
//! ## Lifecycle
//!
//! The auction moves through three windows driven purely by ledger time:
//!
//! 1. **Bidding** ([`BlindAuction::bid`]): bidders lock a token deposit
//!    behind a sealed commitment. The bid value stays hidden; only the
//!    deposit is visible.
//! 2. **Reveal** ([`BlindAuction::reveal`]): bidders open every commitment
//!    they made. Openings that match and are covered by their deposit compete
//!    for the highest bid; displaced leaders are credited to pending returns.
//!    Openings that do not match forfeit their deposit.
//! 3. **Settlement** ([`BlindAuction::settle`]): once the reveal window has
//!    closed, the winning amount is paid to the beneficiary exactly once.
//!
//! Refunds never leave the contract on their own. They accumulate as pending
//! returns and are pulled by their owner with [`BlindAuction::withdraw`], at
//! any time.
//!
//! ## Modules
//!
//! - [`errors`]: [`Error`] variants returned by fallible functions.
//! - [`events`]: notifications published for bids, reveals, withdrawals
//!   and settlement.
//! - [`commitment`]: the canonical blinded-bid digest.
//! - [`types`]: [`Bid`], [`AuctionConfig`], [`AuctionState`],
//!   [`AuctionPhase`] and [`DataKey`] definitions.

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, BytesN, Env, Vec,
};

pub mod commitment;
mod errors;
pub mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{
    AuctionConfig, AuctionPhase, AuctionState, Bid, DataKey, MAX_BIDS_PER_BIDDER,
};

use events::{
    AuctionEndedEventData, BidPlacedEventData, BidRevealedEventData,
    HighestBidIncreasedEventData, WithdrawnEventData,
};

#[contract]
pub struct BlindAuction;

#[contractimpl]
impl BlindAuction {
    // ─── Construction ────────────────────────────────────────────────────────

    /// Create the auction. Runs once, at deployment.
    ///
    /// The bidding window opens immediately and lasts `bidding_time` seconds;
    /// the reveal window follows for `reveal_time` seconds. Neither window,
    /// the `beneficiary` nor the deposit `token` can be changed afterwards.
    ///
    /// # Panics
    ///
    /// Aborts deployment with [`Error::InvalidDuration`] when either window is
    /// zero or the deadlines overflow the ledger clock.
    pub fn __constructor(
        env: Env,
        beneficiary: Address,
        token: Address,
        bidding_time: u64,
        reveal_time: u64,
    ) {
        if bidding_time == 0 || reveal_time == 0 {
            panic_with_error!(&env, Error::InvalidDuration);
        }

        let now = env.ledger().timestamp();
        let bidding_end = now
            .checked_add(bidding_time)
            .unwrap_or_else(|| panic_with_error!(&env, Error::InvalidDuration));
        let reveal_end = bidding_end
            .checked_add(reveal_time)
            .unwrap_or_else(|| panic_with_error!(&env, Error::InvalidDuration));

        storage::set_config(
            &env,
            &AuctionConfig {
                beneficiary,
                token,
                bidding_end,
                reveal_end,
            },
        );
        storage::set_state(
            &env,
            &AuctionState {
                highest_bid: 0,
                highest_bidder: None,
                ended: false,
            },
        );
        storage::extend_instance_ttl(&env);
    }

    // ─── Bidding ─────────────────────────────────────────────────────────────

    /// Commit a sealed bid, locking `deposit` tokens in the contract.
    ///
    /// `blinded_bid` should be [`commitment::digest`] of the real value and a
    /// secret the bidder keeps until the reveal window. Its content is not
    /// checked. A bid only counts at reveal if `deposit` covers its value, so
    /// bidders may over-deposit to hide what they are willing to pay.
    ///
    /// Returns the index of the new bid in the bidder's record.
    ///
    /// # Errors
    ///
    /// - [`Error::TooLate`]: the bidding window has closed.
    /// - [`Error::InvalidDeposit`]: `deposit` is not positive.
    /// - [`Error::TooManyBids`]: the bidder already holds
    ///   [`MAX_BIDS_PER_BIDDER`] commitments.
    pub fn bid(
        env: Env,
        bidder: Address,
        blinded_bid: BytesN<32>,
        deposit: i128,
    ) -> Result<u32, Error> {
        bidder.require_auth();

        let config = storage::get_config(&env);
        only_before(&env, config.bidding_end)?;

        if deposit <= 0 {
            return Err(Error::InvalidDeposit);
        }

        if storage::get_bids(&env, &bidder).len() >= MAX_BIDS_PER_BIDDER {
            return Err(Error::TooManyBids);
        }

        let token_client = token::TokenClient::new(&env, &config.token);
        token_client.transfer(&bidder, &env.current_contract_address(), &deposit);

        let index = storage::add_bid(
            &env,
            &bidder,
            Bid {
                blinded_bid,
                deposit,
            },
        );

        BidPlacedEventData {
            bidder,
            index,
            deposit,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(index)
    }

    // ─── Reveal ──────────────────────────────────────────────────────────────

    /// Open every commitment the bidder made, in submission order.
    ///
    /// For each slot:
    ///
    /// - a matching opening whose value beats the current highest bid and is
    ///   covered by its deposit becomes the new highest bid; the displaced
    ///   leader's amount moves to their pending return. The deposit behind
    ///   the winning slot is kept in full.
    /// - any other matching opening has its deposit credited back to the
    ///   bidder's pending return.
    /// - a non-matching opening forfeits its deposit. This is not an error.
    ///
    /// Every slot's commitment is zeroed whether or not it matched, so a slot
    /// can be opened at most once.
    ///
    /// # Errors
    ///
    /// - [`Error::TooEarly`]: the bidding window is still open.
    /// - [`Error::TooLate`]: the reveal window has closed.
    /// - [`Error::LengthMismatch`]: `values` or `secrets` does not have one
    ///   entry per bid.
    pub fn reveal(
        env: Env,
        bidder: Address,
        values: Vec<i128>,
        secrets: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(&env);
        only_after(&env, config.bidding_end)?;
        only_before(&env, config.reveal_end)?;

        let mut bids = storage::get_bids(&env, &bidder);
        let length = bids.len();
        if values.len() != length || secrets.len() != length {
            return Err(Error::LengthMismatch);
        }

        let mut state = storage::get_state(&env);
        let mut refund: i128 = 0;

        for index in 0..length {
            let mut bid = bids.get_unchecked(index);
            let value = values.get_unchecked(index);
            let secret = secrets.get_unchecked(index);

            let valid = commitment::matches(&env, &bid.blinded_bid, value, &secret);
            if valid {
                if value > state.highest_bid && bid.deposit >= value {
                    place_bid(&env, &mut state, &bidder, value);
                } else {
                    refund += bid.deposit;
                }
            }

            bid.blinded_bid = commitment::zeroed(&env);
            bids.set(index, bid);

            BidRevealedEventData {
                bidder: bidder.clone(),
                index,
                value,
                valid,
            }
            .publish(&env);
        }

        storage::set_bids(&env, &bidder, &bids);
        storage::set_state(&env, &state);
        if refund > 0 {
            storage::credit_pending_return(&env, &bidder, refund);
        }

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ─── Withdrawal ──────────────────────────────────────────────────────────

    /// Pull the caller's pending return.
    ///
    /// The balance is cleared before the token transfer is attempted. If the
    /// transfer fails the balance is restored and `false` is returned; the
    /// call itself still succeeds so it can simply be retried. An empty
    /// balance is a successful no-op.
    pub fn withdraw(env: Env, caller: Address) -> bool {
        caller.require_auth();

        let amount = storage::get_pending_return(&env, &caller);
        if amount <= 0 {
            return true;
        }

        storage::remove_pending_return(&env, &caller);

        let config = storage::get_config(&env);
        let token_client = token::TokenClient::new(&env, &config.token);
        let sent = matches!(
            token_client.try_transfer(&env.current_contract_address(), &caller, &amount),
            Ok(Ok(()))
        );

        if !sent {
            log!(&env, "withdraw transfer failed, restoring pending return", caller, amount);
            storage::set_pending_return(&env, &caller, amount);
        }

        WithdrawnEventData {
            recipient: caller,
            amount,
            success: sent,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        sent
    }

    // ─── Settlement ──────────────────────────────────────────────────────────

    /// End the auction and pay the highest bid to the beneficiary.
    ///
    /// Anyone may call this once the reveal window has closed. The token
    /// transfer is fatal: if it fails the whole call is rolled back, the
    /// auction stays open for settlement and `settle` may be called again.
    /// An auction without a winner ends without a transfer.
    ///
    /// # Errors
    ///
    /// - [`Error::TooEarly`]: the reveal window is still open.
    /// - [`Error::AlreadyEnded`]: the auction has already been settled.
    pub fn settle(env: Env) -> Result<(), Error> {
        let config = storage::get_config(&env);
        only_after(&env, config.reveal_end)?;

        let mut state = storage::get_state(&env);
        if state.ended {
            return Err(Error::AlreadyEnded);
        }

        state.ended = true;
        storage::set_state(&env, &state);

        AuctionEndedEventData {
            winner: state.highest_bidder.clone(),
            amount: state.highest_bid,
        }
        .publish(&env);

        if state.highest_bidder.is_some() && state.highest_bid > 0 {
            let token_client = token::TokenClient::new(&env, &config.token);
            token_client.transfer(
                &env.current_contract_address(),
                &config.beneficiary,
                &state.highest_bid,
            );
        }

        log!(&env, "auction settled", state.highest_bidder, state.highest_bid);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ─── Views ───────────────────────────────────────────────────────────────

    pub fn highest_bid(env: Env) -> i128 {
        storage::get_state(&env).highest_bid
    }

    pub fn highest_bidder(env: Env) -> Option<Address> {
        storage::get_state(&env).highest_bidder
    }

    pub fn pending_return(env: Env, owner: Address) -> i128 {
        storage::get_pending_return(&env, &owner)
    }

    pub fn ended(env: Env) -> bool {
        storage::get_state(&env).ended
    }

    /// Current position on the auction timeline.
    pub fn phase(env: Env) -> AuctionPhase {
        let config = storage::get_config(&env);
        if storage::get_state(&env).ended {
            return AuctionPhase::Ended;
        }
        let now = env.ledger().timestamp();
        if now < config.bidding_end {
            AuctionPhase::Bidding
        } else if now < config.reveal_end {
            AuctionPhase::Reveal
        } else {
            AuctionPhase::AwaitingSettlement
        }
    }

    pub fn config(env: Env) -> AuctionConfig {
        storage::get_config(&env)
    }

    /// Bids committed by `bidder`, in submission order.
    pub fn bids(env: Env, bidder: Address) -> Vec<Bid> {
        storage::get_bids(&env, &bidder)
    }

    pub fn bid_count(env: Env, bidder: Address) -> u32 {
        storage::get_bids(&env, &bidder).len()
    }

    /// Compute the blinded bid for `value` and `secret` with the same
    /// encoding [`BlindAuction::reveal`] checks against.
    pub fn compute_commitment(env: Env, value: i128, secret: BytesN<32>) -> BytesN<32> {
        commitment::digest(&env, value, &secret)
    }
}

// ─── Internal Helpers ────────────────────────────────────────────────────────

fn only_before(env: &Env, time: u64) -> Result<(), Error> {
    if env.ledger().timestamp() >= time {
        log!(env, "too late, window closed at", time);
        return Err(Error::TooLate);
    }
    Ok(())
}

fn only_after(env: &Env, time: u64) -> Result<(), Error> {
    if env.ledger().timestamp() < time {
        log!(env, "too early, window opens at", time);
        return Err(Error::TooEarly);
    }
    Ok(())
}

/// Make `bidder` the leader at `value`, crediting the displaced leader.
fn place_bid(env: &Env, state: &mut AuctionState, bidder: &Address, value: i128) {
    if let Some(previous) = &state.highest_bidder {
        storage::credit_pending_return(env, previous, state.highest_bid);
    }
    state.highest_bid = value;
    state.highest_bidder = Some(bidder.clone());

    HighestBidIncreasedEventData {
        bidder: bidder.clone(),
        amount: value,
    }
    .publish(env);
}

#[cfg(test)]
mod test;
