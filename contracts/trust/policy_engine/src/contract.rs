#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};
use trust_base::score_store::QueryMsg as ScoreStoreQueryMsg;
use trust_base::{can_perform, require_address, Tier};

use crate::error::ContractError;
use crate::msg::{AccessInfoResponse, ConfigResponse, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:policy-engine";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let score_store = require_address(deps.api, "score_store", &msg.score_store)
        .map_err(|reason| ContractError::InvalidConfiguration { reason })?;

    CONFIG.save(
        deps.storage,
        &Config {
            score_store: score_store.clone(),
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("score_store", score_store))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetUserTier { subject } => to_json_binary(&query_user_tier(deps, subject)?),
        QueryMsg::CanPerformAction { subject } => {
            to_json_binary(&query_can_perform_action(deps, subject)?)
        }
        QueryMsg::GetAccessInfo { subject } => to_json_binary(&query_access_info(deps, subject)?),
        QueryMsg::GetTierName { subject } => {
            to_json_binary(&query_user_tier(deps, subject)?.as_str())
        }
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?),
    }
}

/// Reads the current score from the score store. Never cached.
fn query_score(deps: Deps, subject: String) -> StdResult<u64> {
    let Config { score_store } = CONFIG.load(deps.storage)?;
    deps.querier
        .query_wasm_smart(score_store, &ScoreStoreQueryMsg::GetScore { subject })
}

fn query_user_tier(deps: Deps, subject: String) -> StdResult<Tier> {
    Ok(Tier::from_score(query_score(deps, subject)?))
}

fn query_can_perform_action(deps: Deps, subject: String) -> StdResult<bool> {
    Ok(can_perform(query_score(deps, subject)?))
}

fn query_access_info(deps: Deps, subject: String) -> StdResult<AccessInfoResponse> {
    let score = query_score(deps, subject)?;
    Ok(AccessInfoResponse {
        score,
        tier: Tier::from_score(score),
        can_perform: can_perform(score),
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let Config { score_store } = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse { score_store })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("new_contract_name", CONTRACT_NAME)
        .add_attribute("new_contract_version", CONTRACT_VERSION))
}
