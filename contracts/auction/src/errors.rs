use soroban_sdk::contracterror;

/// Error codes for the sealed auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Platform fee above 100%
    InvalidFeeRate = 3,
    /// Caller does not have required permissions
    Unauthorized = 4,
    /// Auction does not exist
    AuctionNotFound = 5,
    /// Auction is not in the Active status
    AuctionNotActive = 6,
    /// Current time is outside the bidding window
    BiddingClosed = 7,
    /// End requested before expiry by someone other than the seller
    AuctionStillActive = 8,
    /// Bid is not strictly greater than the current highest bid
    BidTooLow = 9,
    /// Bid is below the auction minimum
    BidBelowMinimum = 10,
    /// Seller may not bid on their own auction
    SellerCannotBid = 11,
    /// Caller does not own the asset per the registry
    NotAssetOwner = 12,
    /// Minimum bid must be positive
    InvalidMinimumBid = 13,
    /// Auction duration below the allowed floor
    DurationTooShort = 14,
    /// Reserve price below the minimum bid
    InvalidReservePrice = 15,
    /// Auction already received a bid
    CannotCancelWithBids = 16,
    /// No refundable balance for this auction and caller
    NothingToWithdraw = 17,
}
