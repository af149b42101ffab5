use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::{ensure_from_older_version, set_contract_version};

use crate::{
    execute,
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query,
    state::{Config, CONFIG, CONTEST_COUNT, ORDER_COUNT, TEAM_COUNT, WITHDRAWAL_COUNT},
    ContractError,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:eleven-core";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(
        deps.storage,
        &Config {
            min_withdrawal: msg.min_withdrawal,
        },
    )?;
    CONTEST_COUNT.save(deps.storage, &Uint128::zero())?;
    ORDER_COUNT.save(deps.storage, &Uint128::zero())?;
    TEAM_COUNT.save(deps.storage, &Uint128::zero())?;
    WITHDRAWAL_COUNT.save(deps.storage, &Uint128::zero())?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner.as_str()))?;

    Ok(Response::new().add_attributes(ownership.into_attributes()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::new().add_attributes(ownership.into_attributes()))
        }
        ExecuteMsg::UpdateRoles { to_add, to_remove } => {
            execute::update_roles(deps, info, to_add, to_remove)
        }
        ExecuteMsg::CreateContest {
            match_ref,
            entry_fee,
            max_teams,
            allow_multiple_entries,
            prize_table,
        } => execute::create_contest(
            deps,
            env,
            info,
            match_ref,
            entry_fee,
            max_teams,
            allow_multiple_entries,
            prize_table,
        ),
        ExecuteMsg::CloseContest { contest_id } => execute::close_contest(deps, info, contest_id),
        ExecuteMsg::CreateOrder { amount } => execute::create_order(deps, info, amount),
        ExecuteMsg::ConfirmPayment {
            order_id,
            payment_reference,
        } => execute::confirm_payment(deps, info, order_id, payment_reference),
        ExecuteMsg::FailPayment { order_id } => execute::fail_payment(deps, info, order_id),
        ExecuteMsg::JoinContest { contest_id, team } => {
            execute::join_contest(deps, env, info, contest_id, team)
        }
        ExecuteMsg::RequestWithdrawal {
            amount,
            destination,
        } => execute::request_withdrawal(deps, env, info, amount, destination),
        ExecuteMsg::CompleteWithdrawal { withdrawal_id } => {
            execute::complete_withdrawal(deps, info, withdrawal_id)
        }
        ExecuteMsg::ReverseWithdrawal { withdrawal_id } => {
            execute::reverse_withdrawal(deps, info, withdrawal_id)
        }
        ExecuteMsg::UpdateTeamPoints {
            contest_id,
            updates,
        } => execute::update_team_points(deps, info, contest_id, updates),
        ExecuteMsg::SettleContest { contest_id } => {
            execute::settle_contest(deps, info, contest_id)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Account { addr } => to_json_binary(&query::account(deps, addr)?),
        QueryMsg::Contest { contest_id } => to_json_binary(&query::contest(deps, contest_id)?),
        QueryMsg::Contests { start_after, limit } => {
            to_json_binary(&query::contests(deps, start_after, limit)?)
        }
        QueryMsg::ContestCount {} => to_json_binary(&query::contest_count(deps)?),
        QueryMsg::Order { order_id } => to_json_binary(&query::order(deps, order_id)?),
        QueryMsg::Team {
            contest_id,
            team_id,
        } => to_json_binary(&query::team(deps, contest_id, team_id)?),
        QueryMsg::Leaderboard { contest_id } => {
            to_json_binary(&query::leaderboard(deps, contest_id)?)
        }
        QueryMsg::Withdrawal { withdrawal_id } => {
            to_json_binary(&query::withdrawal(deps, withdrawal_id)?)
        }
        QueryMsg::HasRole { addr, role } => to_json_binary(&query::has_role(deps, addr, role)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    let _version = ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    match msg {
        MigrateMsg::FromCompatible {} => {}
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
