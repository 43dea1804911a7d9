use crate::test::{advance_ledger, create_default_auction, setup_test};
use crate::Error;

#[test]
fn test_withdraw_after_outbid() {
    let ctx = setup_test();
    let auction_id = create_default_auction(&ctx);
    ctx.client.place_bid(&auction_id, &ctx.bidder, &150);
    ctx.client.place_bid(&auction_id, &ctx.rival, &250);

    let released = ctx.client.withdraw_bid(&auction_id, &ctx.bidder);
    assert_eq!(released, 150);
    assert_eq!(ctx.token.balance(&ctx.bidder), 1_000_000);
    assert_eq!(ctx.client.get_pending_return(&auction_id, &ctx.bidder), 0);
}

#[test]
fn test_withdraw_twice_fails() {
    let ctx = setup_test();
    let auction_id = create_default_auction(&ctx);
    ctx.client.place_bid(&auction_id, &ctx.bidder, &150);
    ctx.client.place_bid(&auction_id, &ctx.rival, &250);

    ctx.client.withdraw_bid(&auction_id, &ctx.bidder);
    let result = ctx.client.try_withdraw_bid(&auction_id, &ctx.bidder);
    assert_eq!(result, Err(Ok(Error::NothingToWithdraw)));
}

#[test]
fn test_withdraw_nothing_owed() {
    let ctx = setup_test();
    let auction_id = create_default_auction(&ctx);
    ctx.client.place_bid(&auction_id, &ctx.bidder, &150);

    // The leading bid is not refundable while it leads.
    let result = ctx.client.try_withdraw_bid(&auction_id, &ctx.bidder);
    assert_eq!(result, Err(Ok(Error::NothingToWithdraw)));
}

#[test]
fn test_withdraw_unknown_auction() {
    let ctx = setup_test();
    let result = ctx.client.try_withdraw_bid(&999, &ctx.bidder);
    assert_eq!(result, Err(Ok(Error::AuctionNotFound)));
}

#[test]
fn test_withdraw_accumulated_returns() {
    let ctx = setup_test();
    let auction_id = create_default_auction(&ctx);
    ctx.client.place_bid(&auction_id, &ctx.bidder, &100);
    ctx.client.place_bid(&auction_id, &ctx.rival, &150);
    ctx.client.place_bid(&auction_id, &ctx.bidder, &200);
    ctx.client.place_bid(&auction_id, &ctx.rival, &300);

    let released = ctx.client.withdraw_bid(&auction_id, &ctx.bidder);
    assert_eq!(released, 300);
    assert_eq!(ctx.token.balance(&ctx.bidder), 1_000_000);
}

#[test]
fn test_withdraw_after_settlement() {
    let ctx = setup_test();
    let auction_id = create_default_auction(&ctx);
    ctx.client.place_bid(&auction_id, &ctx.bidder, &150);
    ctx.client.place_bid(&auction_id, &ctx.rival, &250);
    advance_ledger(&ctx.env, 3601);
    ctx.client.end_auction(&auction_id, &ctx.rival);

    // Settlement does not touch the escrow ledger; the displaced bid stays
    // withdrawable indefinitely.
    let released = ctx.client.withdraw_bid(&auction_id, &ctx.bidder);
    assert_eq!(released, 150);
    assert_eq!(ctx.token.balance(&ctx.bidder), 1_000_000);
}
