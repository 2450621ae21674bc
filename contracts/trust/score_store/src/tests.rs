use crate::contract::{execute, instantiate, migrate, query};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ScoreRecordResponse,
    ScoresResponse,
};

use cosmwasm_std::testing::{
    mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{from_json, Addr, Attribute, Env, OwnedDeps, Response};
use cw2::set_contract_version;
use trust_base::score_store::NEVER_UPDATED;

const ORACLE: &str = "oracle";
const DEPLOYER: &str = "deployer";
const USER: &str = "user";

fn setup_contract() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
    let mut deps = mock_dependencies();
    let msg = InstantiateMsg {
        oracle: ORACLE.to_string(),
    };
    let res = instantiate(deps.as_mut(), mock_env(), mock_info(DEPLOYER, &[]), msg).unwrap();
    assert_eq!(0, res.messages.len());
    deps
}

fn update_score(
    deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
    env: Env,
    sender: &str,
    subject: &str,
    score: u64,
) -> Result<Response, ContractError> {
    execute(
        deps.as_mut(),
        env,
        mock_info(sender, &[]),
        ExecuteMsg::UpdateScore {
            subject: subject.to_string(),
            score,
        },
    )
}

fn query_record(
    deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
    subject: &str,
) -> ScoreRecordResponse {
    from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::GetScoreRecord {
                subject: subject.to_string(),
            },
        )
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn proper_instantiation() {
    let deps = setup_contract();
    let config: ConfigResponse =
        from_json(query(deps.as_ref(), mock_env(), QueryMsg::GetConfig {}).unwrap()).unwrap();
    assert_eq!(config.oracle, Addr::unchecked(ORACLE));
}

#[test]
fn instantiate_rejects_null_oracle() {
    let mut deps = mock_dependencies();
    let err = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(DEPLOYER, &[]),
        InstantiateMsg {
            oracle: String::new(),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::InvalidConfiguration {
            reason: "oracle must not be the null address".to_string()
        }
    );
}

#[test]
fn unknown_subject_reads_defaults() {
    let deps = setup_contract();

    let score: u64 = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::GetScore {
                subject: USER.to_string(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    let has_score: bool = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::HasScore {
                subject: USER.to_string(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    let last_updated: u64 = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::GetLastUpdated {
                subject: USER.to_string(),
            },
        )
        .unwrap(),
    )
    .unwrap();

    assert_eq!(score, 0);
    assert!(!has_score);
    assert_eq!(last_updated, NEVER_UPDATED);
}

#[test]
fn oracle_updates_score() {
    let mut deps = setup_contract();
    let env = mock_env();

    let res = update_score(&mut deps, env.clone(), ORACLE, USER, 85).unwrap();
    assert_eq!(res.events.len(), 1);
    let event = &res.events[0];
    assert_eq!(event.ty, "score_updated");
    assert_eq!(
        event.attributes,
        vec![
            Attribute::new("subject", USER),
            Attribute::new("old_score", "0"),
            Attribute::new("new_score", "85"),
            Attribute::new("timestamp", env.block.time.seconds().to_string()),
        ]
    );

    let record = query_record(&deps, USER);
    assert_eq!(record.score, 85);
    assert!(record.has_score);
    assert_eq!(record.last_updated, env.block.time.seconds());
    assert!(record.last_updated > NEVER_UPDATED);

    // overwriting reports the previous score
    let mut later = mock_env();
    later.block.time = later.block.time.plus_seconds(60);
    let res = update_score(&mut deps, later.clone(), ORACLE, USER, 40).unwrap();
    assert!(res.events[0]
        .attributes
        .contains(&Attribute::new("old_score", "85")));
    let record = query_record(&deps, USER);
    assert_eq!(record.score, 40);
    assert_eq!(record.last_updated, later.block.time.seconds());
}

#[test]
fn explicit_zero_counts_as_written() {
    let mut deps = setup_contract();
    update_score(&mut deps, mock_env(), ORACLE, USER, 0).unwrap();

    let record = query_record(&deps, USER);
    assert_eq!(record.score, 0);
    assert!(record.has_score);
}

#[test]
fn full_range_is_accepted() {
    let mut deps = setup_contract();
    for score in [0u64, 1, 49, 50, 79, 80, 99, 100] {
        update_score(&mut deps, mock_env(), ORACLE, USER, score).unwrap();
        assert_eq!(query_record(&deps, USER).score, score);
    }
}

#[test]
fn out_of_range_leaves_state_unchanged() {
    let mut deps = setup_contract();
    update_score(&mut deps, mock_env(), ORACLE, USER, 70).unwrap();
    let before = query_record(&deps, USER);

    for score in [101u64, 255, u64::MAX] {
        let err = update_score(&mut deps, mock_env(), ORACLE, USER, score).unwrap_err();
        assert_eq!(err, ContractError::OutOfRange { score });
    }
    assert_eq!(query_record(&deps, USER), before);
}

#[test]
fn non_oracle_is_unauthorized() {
    let mut deps = setup_contract();

    let err = update_score(&mut deps, mock_env(), "intruder", USER, 90).unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            caller: "intruder".to_string(),
            expected: ORACLE.to_string(),
        }
    );

    // an out of range score from a stranger still reports the caller first
    let err = update_score(&mut deps, mock_env(), DEPLOYER, USER, 500).unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized { .. }));

    let record = query_record(&deps, USER);
    assert_eq!(record.score, 0);
    assert!(!record.has_score);
}

#[test]
fn list_scores_paginates() {
    let mut deps = setup_contract();
    for (subject, score) in [("alice", 10u64), ("bob", 60), ("carol", 90)] {
        update_score(&mut deps, mock_env(), ORACLE, subject, score).unwrap();
    }

    let page: ScoresResponse = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::ListScores {
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap(),
    )
    .unwrap();
    let subjects: Vec<_> = page.scores.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["alice", "bob"]);

    let page: ScoresResponse = from_json(
        query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::ListScores {
                start_after: Some("bob".to_string()),
                limit: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(page.scores.len(), 1);
    assert_eq!(page.scores[0].subject, Addr::unchecked("carol"));
    assert_eq!(page.scores[0].score, 90);
    assert!(page.scores[0].has_score);
}

#[test]
fn migrate_checks_contract_name() {
    let mut deps = setup_contract();
    migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap();

    set_contract_version(deps.as_mut().storage, "crates.io:other", "0.1.0").unwrap();
    let err = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap_err();
    assert_eq!(
        err,
        ContractError::CannotMigrate {
            previous_contract: "crates.io:other".to_string()
        }
    );
}
