use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    /// Open for bids until `end_time` or an early force-end by the seller.
    Active = 0,
    /// Settled with a winner; asset and funds have been disbursed.
    Ended = 1,
    /// Cancelled by the seller before any bid was placed.
    Cancelled = 2,
    /// Closed without a sale: no bids, or the reserve price was not met.
    Reserved = 3,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub asset_registry: Address,
    pub asset_id: u64,
    pub seller: Address,
    pub min_bid: i128,
    pub reserve_price: i128,
    /// Zero until the first bid is accepted.
    pub highest_bid: i128,
    /// `None` until the first bid is accepted.
    pub highest_bidder: Option<Address>,
    pub start_time: u64,
    pub end_time: u64,
    pub status: AuctionStatus,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Deployment-time configuration, immutable after `initialize`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Receiver of the platform fee on settlement.
    pub beneficiary: Address,
    /// Platform fee in basis points (250 = 2.5%).
    pub fee_bps: u32,
    /// Token that bids are denominated and collected in.
    pub payment_token: Address,
}

#[contracttype]
pub enum DataKey {
    Config,
    AuctionCounter,
    Auction(u64),
    BidHistory(u64),
    PendingReturn(u64, Address),
}
