use soroban_sdk::{contractevent, Address};

/// Event emitted when an auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub asset_registry: Address,
    pub asset_id: u64,
    pub min_bid: i128,
    pub reserve_price: i128,
    pub start_time: u64,
    pub end_time: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when an auction resolves, with or without a winner
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
    pub fee: i128,
}

/// Event emitted when an unbid auction is cancelled by its seller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
}

/// Event emitted when an outbid participant recovers their funds
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidWithdrawnEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}
