#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, Response,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use trust_base::{require_address, MAX_SCORE};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ScoreRecordResponse,
    ScoresResponse,
};
use crate::state::{Config, ScoreRecord, CONFIG, SCORES};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:score-store";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
// settings for pagination
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let oracle = require_address(deps.api, "oracle", &msg.oracle)
        .map_err(|reason| ContractError::InvalidConfiguration { reason })?;

    CONFIG.save(
        deps.storage,
        &Config {
            oracle: oracle.clone(),
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("oracle", oracle))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateScore { subject, score } => {
            execute_update_score(deps, env, info, subject, score)
        }
    }
}

pub fn execute_update_score(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    subject: String,
    score: u64,
) -> Result<Response, ContractError> {
    let Config { oracle } = CONFIG.load(deps.storage)?;
    if info.sender != oracle {
        return Err(ContractError::Unauthorized {
            caller: info.sender.to_string(),
            expected: oracle.to_string(),
        });
    }
    if score > MAX_SCORE {
        return Err(ContractError::OutOfRange { score });
    }

    let subject = deps.api.addr_validate(&subject)?;
    let old_score = SCORES
        .may_load(deps.storage, &subject)?
        .unwrap_or_default()
        .score;
    let timestamp = env.block.time.seconds();
    SCORES.save(
        deps.storage,
        &subject,
        &ScoreRecord {
            score,
            last_updated: timestamp,
        },
    )?;

    let event = Event::new("score_updated")
        .add_attribute("subject", subject)
        .add_attribute("old_score", old_score.to_string())
        .add_attribute("new_score", score.to_string())
        .add_attribute("timestamp", timestamp.to_string());

    Ok(Response::new()
        .add_attribute("action", "update_score")
        .add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetScore { subject } => to_json_binary(&query_record(deps, subject)?.score),
        QueryMsg::GetLastUpdated { subject } => {
            to_json_binary(&query_record(deps, subject)?.last_updated)
        }
        QueryMsg::HasScore { subject } => to_json_binary(&query_record(deps, subject)?.has_score),
        QueryMsg::GetScoreRecord { subject } => to_json_binary(&query_record(deps, subject)?),
        QueryMsg::ListScores { start_after, limit } => {
            to_json_binary(&query_list_scores(deps, start_after, limit)?)
        }
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?),
    }
}

fn to_response(subject: Addr, record: ScoreRecord) -> ScoreRecordResponse {
    ScoreRecordResponse {
        subject,
        score: record.score,
        last_updated: record.last_updated,
        has_score: record.has_score(),
    }
}

fn query_record(deps: Deps, subject: String) -> StdResult<ScoreRecordResponse> {
    let subject = deps.api.addr_validate(&subject)?;
    // unknown subjects read as the default record
    let record = SCORES
        .may_load(deps.storage, &subject)?
        .unwrap_or_default();
    Ok(to_response(subject, record))
}

fn query_list_scores(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ScoresResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let min = start_after.as_ref().map(Bound::exclusive);

    let scores = SCORES
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(subject, record)| to_response(subject, record)))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(ScoresResponse { scores })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let Config { oracle } = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse { oracle })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }

    // once we have "migrated", set the new version and return success
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("new_contract_name", CONTRACT_NAME)
        .add_attribute("new_contract_version", CONTRACT_VERSION))
}
