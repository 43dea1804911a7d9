//! Refundable-balance ledger for outbid participants.
//!
//! One entry per (auction, bidder) pair that has ever been displaced.
//! Entries only grow through `credit` and are zeroed exactly once by
//! `withdraw`; an absent entry means nothing is owed.

use crate::types::DataKey;
use soroban_sdk::{Address, Env};

pub fn pending_return(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = DataKey::PendingReturn(auction_id, bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

/// Book a displaced bid as refundable. Amounts accumulate, so a bidder
/// displaced twice without withdrawing in between is owed the sum.
pub fn credit(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = DataKey::PendingReturn(auction_id, bidder.clone());
    let owed = pending_return(env, auction_id, bidder);
    env.storage().persistent().set(&key, &(owed + amount));
}

/// Take the full refundable balance, zeroing the entry before the amount
/// is handed back. A repeated or re-entered call sees zero owed, so at
/// most one non-zero amount is ever released per (auction, bidder).
pub fn withdraw(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = DataKey::PendingReturn(auction_id, bidder.clone());
    let owed = pending_return(env, auction_id, bidder);
    env.storage().persistent().remove(&key);
    owed
}
