use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub score_store: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Revoked operators stay in the map with `false`.
pub const OPERATORS: Map<&Addr, bool> = Map::new("operators");
