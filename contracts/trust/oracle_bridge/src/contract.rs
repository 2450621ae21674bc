#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, Response,
    StdResult, Storage, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use trust_base::require_address;
use trust_base::score_store::ExecuteMsg as ScoreStoreExecuteMsg;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, OperatorsResponse, QueryMsg,
};
use crate::state::{Config, CONFIG, OPERATORS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:oracle-bridge";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
// settings for pagination
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let score_store = require_address(deps.api, "score_store", &msg.score_store)
        .map_err(|reason| ContractError::InvalidConfiguration { reason })?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: info.sender.clone(),
            score_store: score_store.clone(),
        },
    )?;
    // the deployer is the first operator
    OPERATORS.save(deps.storage, &info.sender, &true)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender.clone())
        .add_attribute("score_store", score_store)
        .add_event(operator_updated_event(&info.sender, true)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::PushScore { subject, score } => {
            execute_push_score(deps, env, info, subject, score)
        }
        ExecuteMsg::PushScoreBatch { subjects, scores } => {
            execute_push_score_batch(deps, env, info, subjects, scores)
        }
        ExecuteMsg::SetOperator {
            operator,
            authorized,
        } => execute_set_operator(deps, info, operator, authorized),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

fn assert_operator(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let authorized = OPERATORS.may_load(storage, sender)?.unwrap_or(false);
    if !authorized {
        return Err(ContractError::Unauthorized {
            caller: sender.to_string(),
        });
    }
    Ok(())
}

fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if config.owner != *sender {
        return Err(ContractError::Unauthorized {
            caller: sender.to_string(),
        });
    }
    Ok(config)
}

fn operator_updated_event(operator: &Addr, authorized: bool) -> Event {
    Event::new("operator_updated")
        .add_attribute("operator", operator.as_str())
        .add_attribute("authorized", authorized.to_string())
}

/// Builds the forwarded update and the matching `score_pushed` event.
/// The score is not range checked here; the score store's own error reverts
/// the whole transaction, event included.
fn forward_score(
    api: &dyn Api,
    score_store: &Addr,
    timestamp: u64,
    subject: String,
    score: u64,
) -> Result<(WasmMsg, Event), ContractError> {
    let subject = api.addr_validate(&subject)?;
    let msg = WasmMsg::Execute {
        contract_addr: score_store.to_string(),
        msg: to_json_binary(&ScoreStoreExecuteMsg::UpdateScore {
            subject: subject.to_string(),
            score,
        })?,
        funds: vec![],
    };
    let event = Event::new("score_pushed")
        .add_attribute("subject", subject)
        .add_attribute("score", score.to_string())
        .add_attribute("timestamp", timestamp.to_string());
    Ok((msg, event))
}

pub fn execute_push_score(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    subject: String,
    score: u64,
) -> Result<Response, ContractError> {
    assert_operator(deps.storage, &info.sender)?;
    let Config { score_store, .. } = CONFIG.load(deps.storage)?;

    let timestamp = env.block.time.seconds();
    let (msg, event) = forward_score(deps.api, &score_store, timestamp, subject, score)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "push_score")
        .add_attribute("operator", info.sender)
        .add_event(event))
}

pub fn execute_push_score_batch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    subjects: Vec<String>,
    scores: Vec<u64>,
) -> Result<Response, ContractError> {
    assert_operator(deps.storage, &info.sender)?;
    if subjects.len() != scores.len() {
        return Err(ContractError::LengthMismatch {
            subjects: subjects.len(),
            scores: scores.len(),
        });
    }
    if subjects.is_empty() {
        return Err(ContractError::EmptyBatch {});
    }
    let Config { score_store, .. } = CONFIG.load(deps.storage)?;
    let timestamp = env.block.time.seconds();

    let size = subjects.len();
    let mut response = Response::new();
    // sub messages run in insertion order, so the store sees the input order
    for (subject, score) in subjects.into_iter().zip(scores) {
        let (msg, event) = forward_score(deps.api, &score_store, timestamp, subject, score)?;
        response = response.add_message(msg).add_event(event);
    }

    Ok(response
        .add_attribute("action", "push_score_batch")
        .add_attribute("operator", info.sender)
        .add_attribute("size", size.to_string()))
}

pub fn execute_set_operator(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let operator = deps.api.addr_validate(&operator)?;

    OPERATORS.save(deps.storage, &operator, &authorized)?;

    Ok(Response::new()
        .add_attribute("action", "set_operator")
        .add_event(operator_updated_event(&operator, authorized)))
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = assert_owner(deps.storage, &info.sender)?;
    let new_owner = require_address(deps.api, "new_owner", &new_owner)
        .map_err(|reason| ContractError::InvalidConfiguration { reason })?;

    // operator membership of either owner is left untouched
    let previous_owner = std::mem::replace(&mut config.owner, new_owner.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_event(
            Event::new("ownership_transferred")
                .add_attribute("previous_owner", previous_owner)
                .add_attribute("new_owner", new_owner),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsOperator { address } => to_json_binary(&query_is_operator(deps, address)?),
        QueryMsg::ListOperators { start_after, limit } => {
            to_json_binary(&query_list_operators(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let Config { owner, score_store } = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse { owner, score_store })
}

fn query_is_operator(deps: Deps, address: String) -> StdResult<bool> {
    let address = deps.api.addr_validate(&address)?;
    Ok(OPERATORS
        .may_load(deps.storage, &address)?
        .unwrap_or(false))
}

fn query_list_operators(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<OperatorsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let min = start_after.as_ref().map(Bound::exclusive);

    let operators = OPERATORS
        .range(deps.storage, min, None, Order::Ascending)
        .filter(|item| !matches!(item, Ok((_, false))))
        .take(limit)
        .map(|item| item.map(|(operator, _)| operator))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(OperatorsResponse { operators })
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
