#![no_std]

//! Sealed, time-boxed asset auction with a pull-payment escrow ledger.
//!
//! A seller deposits an asset (held by an external asset registry) into
//! contract custody, bidders compete with strictly increasing bids paid in
//! the configured token, and at expiry the asset and funds settle between
//! winner and seller minus the platform fee, or revert to the seller when
//! the reserve price is unmet. Displaced bids are never pushed back inline;
//! they sit in a refundable ledger until the bidder withdraws them.

mod errors;
mod escrow;
mod events;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test;

pub use errors::Error;
pub use registry::{AssetRegistry, AssetRegistryClient};
pub use types::{Auction, AuctionStatus, Bid, Config};

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use events::{
    AuctionCancelledEventData, AuctionCreatedEventData, AuctionEndedEventData, BidPlacedEventData,
    BidWithdrawnEventData,
};

/// Shortest allowed auction duration, in seconds.
pub const MIN_AUCTION_DURATION: u64 = 3600;

const BPS_DENOMINATOR: i128 = 10_000;

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// One-shot deployment configuration: fee receiver, fee rate in basis
    /// points and the token bids are collected in. Immutable afterwards.
    pub fn initialize(
        env: Env,
        beneficiary: Address,
        fee_bps: u32,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if fee_bps > BPS_DENOMINATOR as u32 {
            return Err(Error::InvalidFeeRate);
        }
        beneficiary.require_auth();
        storage::set_config(
            &env,
            &Config {
                beneficiary,
                fee_bps,
                payment_token,
            },
        );
        Ok(())
    }

    /// Open a new auction for an asset the seller owns per the registry.
    ///
    /// Custody of the asset moves to this contract before the auction
    /// record is committed; if the registry rejects the transfer the whole
    /// call traps and no record is created.
    pub fn create_auction(
        env: Env,
        seller: Address,
        asset_registry: Address,
        asset_id: u64,
        min_bid: i128,
        duration: u64,
        reserve_price: i128,
    ) -> Result<u64, Error> {
        seller.require_auth();

        if !storage::has_config(&env) {
            return Err(Error::NotInitialized);
        }
        if min_bid <= 0 {
            return Err(Error::InvalidMinimumBid);
        }
        if duration < MIN_AUCTION_DURATION {
            return Err(Error::DurationTooShort);
        }
        if reserve_price < min_bid {
            return Err(Error::InvalidReservePrice);
        }

        let registry = AssetRegistryClient::new(&env, &asset_registry);
        if registry.owner_of(&asset_id) != seller {
            return Err(Error::NotAssetOwner);
        }
        registry.transfer_from(&seller, &env.current_contract_address(), &asset_id);

        let now = env.ledger().timestamp();
        let auction_id = storage::increment_auction_counter(&env);

        let auction = Auction {
            auction_id,
            asset_registry: asset_registry.clone(),
            asset_id,
            seller: seller.clone(),
            min_bid,
            reserve_price,
            highest_bid: 0,
            highest_bidder: None,
            start_time: now,
            end_time: now + duration,
            status: AuctionStatus::Active,
        };
        storage::save_auction(&env, &auction);

        AuctionCreatedEventData {
            auction_id,
            seller,
            asset_registry,
            asset_id,
            min_bid,
            reserve_price,
            start_time: auction.start_time,
            end_time: auction.end_time,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Submit a bid strictly above the current highest bid. The amount is
    /// collected into contract custody; the displaced bid, if any, becomes
    /// withdrawable through [`withdraw_bid`](Self::withdraw_bid).
    pub fn place_bid(
        env: Env,
        auction_id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.status != AuctionStatus::Active {
            return Err(Error::AuctionNotActive);
        }
        let now = env.ledger().timestamp();
        if now < auction.start_time || now >= auction.end_time {
            return Err(Error::BiddingClosed);
        }
        if bidder == auction.seller {
            return Err(Error::SellerCannotBid);
        }
        if amount < auction.min_bid {
            return Err(Error::BidBelowMinimum);
        }
        if amount <= auction.highest_bid {
            return Err(Error::BidTooLow);
        }

        // Book the displaced bid before the record is overwritten so the
        // amount stays withdrawable.
        if let Some(previous_bidder) = &auction.highest_bidder {
            escrow::credit(&env, auction_id, previous_bidder, auction.highest_bid);
        }

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        storage::save_auction(&env, &auction);
        storage::add_bid_to_history(
            &env,
            auction_id,
            Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: now,
            },
        );

        // State is committed; collect the bid into contract custody.
        let config = storage::get_config(&env);
        token::TokenClient::new(&env, &config.payment_token).transfer(
            &bidder,
            &env.current_contract_address(),
            &amount,
        );

        BidPlacedEventData {
            auction_id,
            bidder,
            amount,
            timestamp: now,
        }
        .publish(&env);

        Ok(())
    }

    /// Resolve an active auction. Anyone may call once `end_time` has
    /// passed; the seller may force-end early. With a highest bid at or
    /// above the reserve price the asset goes to the winner and the seller
    /// is paid net of the platform fee; otherwise the asset returns to the
    /// seller and the collected top bid, if any, is refunded in full.
    pub fn end_auction(env: Env, auction_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.status != AuctionStatus::Active {
            return Err(Error::AuctionNotActive);
        }
        let now = env.ledger().timestamp();
        if now < auction.end_time && caller != auction.seller {
            return Err(Error::AuctionStillActive);
        }

        let config = storage::get_config(&env);
        let contract = env.current_contract_address();
        let registry = AssetRegistryClient::new(&env, &auction.asset_registry);
        let payment = token::TokenClient::new(&env, &config.payment_token);

        let winner = match auction.highest_bidder.clone() {
            Some(bidder) if auction.highest_bid >= auction.reserve_price => Some(bidder),
            _ => None,
        };

        match winner {
            Some(winner) => {
                // Terminal status goes in before any external transfer.
                auction.status = AuctionStatus::Ended;
                storage::save_auction(&env, &auction);

                let fee = platform_fee(auction.highest_bid, config.fee_bps);
                registry.transfer_from(&contract, &winner, &auction.asset_id);
                payment.transfer(&contract, &auction.seller, &(auction.highest_bid - fee));
                if fee > 0 {
                    payment.transfer(&contract, &config.beneficiary, &fee);
                }

                AuctionEndedEventData {
                    auction_id,
                    winner: Some(winner),
                    amount: auction.highest_bid,
                    fee,
                }
                .publish(&env);
            }
            None => {
                auction.status = AuctionStatus::Reserved;
                storage::save_auction(&env, &auction);

                registry.transfer_from(&contract, &auction.seller, &auction.asset_id);
                // The leading bid was collected when placed and is returned
                // in full. Displaced bids stay in the escrow ledger.
                if let Some(bidder) = &auction.highest_bidder {
                    payment.transfer(&contract, bidder, &auction.highest_bid);
                }

                AuctionEndedEventData {
                    auction_id,
                    winner: None,
                    amount: auction.highest_bid,
                    fee: 0,
                }
                .publish(&env);
            }
        }

        Ok(())
    }

    /// Cancel an auction that has never received a bid and return the asset
    /// to the seller. Forbidden once any bid exists.
    pub fn cancel_auction(env: Env, auction_id: u64, seller: Address) -> Result<(), Error> {
        seller.require_auth();

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.status != AuctionStatus::Active {
            return Err(Error::AuctionNotActive);
        }
        if seller != auction.seller {
            return Err(Error::Unauthorized);
        }
        if auction.highest_bidder.is_some() {
            return Err(Error::CannotCancelWithBids);
        }

        auction.status = AuctionStatus::Cancelled;
        storage::save_auction(&env, &auction);

        AssetRegistryClient::new(&env, &auction.asset_registry).transfer_from(
            &env.current_contract_address(),
            &auction.seller,
            &auction.asset_id,
        );

        AuctionCancelledEventData {
            auction_id,
            seller: auction.seller,
        }
        .publish(&env);

        Ok(())
    }

    /// Recover a displaced bid. The ledger entry is zeroed before the
    /// outbound transfer, so a repeated call reports nothing owed.
    pub fn withdraw_bid(env: Env, auction_id: u64, bidder: Address) -> Result<i128, Error> {
        bidder.require_auth();

        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }

        let amount = escrow::withdraw(&env, auction_id, &bidder);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        let config = storage::get_config(&env);
        token::TokenClient::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &bidder,
            &amount,
        );

        BidWithdrawnEventData {
            auction_id,
            bidder,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_highest_bidder(env: Env, auction_id: u64) -> Result<Option<Address>, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(auction.highest_bidder)
    }

    pub fn get_auction_status(env: Env, auction_id: u64) -> Result<AuctionStatus, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(auction.status)
    }

    /// Refundable balance currently owed to `bidder` for this auction.
    pub fn get_pending_return(env: Env, auction_id: u64, bidder: Address) -> i128 {
        escrow::pending_return(&env, auction_id, &bidder)
    }

    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_bid_history(&env, auction_id))
    }

    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        if !storage::has_config(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_config(&env))
    }
}

fn platform_fee(amount: i128, fee_bps: u32) -> i128 {
    (amount * fee_bps as i128) / BPS_DENOMINATOR
}
