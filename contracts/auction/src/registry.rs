use soroban_sdk::{contractclient, Address, Env};

/// Interface of the external asset registry that records custody of the
/// auctioned items. The auction contract only ever needs the ownership
/// read and the custody transfer; everything else about the registry is
/// out of scope.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    fn owner_of(env: Env, asset_id: u64) -> Address;

    /// Moves custody of `asset_id`. Traps if `from` is not the current
    /// owner, which aborts the whole invoking transaction.
    fn transfer_from(env: Env, from: Address, to: Address, asset_id: u64);
}
