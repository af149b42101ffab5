use cosmwasm_std::{Deps, Order, StdResult, Uint128, Uint64};
use cw_storage_plus::Bound;

use crate::{
    msg::{AccountResponse, ContestResponse, RankedTeamResponse, TeamResponse},
    state::{
        PaymentRecord, Role, Team, Withdrawal, ACCOUNTS, CONTESTS, CONTEST_COUNT, ORDERS, TEAMS,
        WITHDRAWALS,
    },
};

pub fn account(deps: Deps, addr: String) -> StdResult<AccountResponse> {
    let addr = deps.api.addr_validate(&addr)?;
    let account = ACCOUNTS
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();

    Ok(AccountResponse {
        addr,
        balance: account.balance,
        total_winnings: account.total_winnings,
        total_contests_joined: account.total_contests_joined,
    })
}

pub fn contest(deps: Deps, contest_id: Uint128) -> StdResult<ContestResponse> {
    let contest = CONTESTS.load(deps.storage, contest_id.u128())?;

    Ok(contest.into_response(contest_id))
}

pub fn contests(
    deps: Deps,
    start_after: Option<Uint128>,
    limit: Option<u32>,
) -> StdResult<Vec<ContestResponse>> {
    let start = start_after.map(|x| Bound::exclusive(x.u128()));

    cw_paginate::paginate_map(&CONTESTS, deps.storage, start, limit, |k, v| {
        Ok(v.into_response(Uint128::new(k)))
    })
}

pub fn contest_count(deps: Deps) -> StdResult<Uint128> {
    CONTEST_COUNT.load(deps.storage)
}

pub fn order(deps: Deps, order_id: Uint128) -> StdResult<PaymentRecord> {
    ORDERS.load(deps.storage, order_id.u128())
}

pub fn team(deps: Deps, contest_id: Uint128, team_id: Uint128) -> StdResult<TeamResponse> {
    let team = TEAMS.load(deps.storage, (contest_id.u128(), team_id.u128()))?;

    Ok(team.into_response(contest_id, team_id))
}

/// The leaderboard projection: points descending, ties broken by earliest
/// creation then team id so repeated calls produce the same total order.
/// Never mutates the underlying teams.
pub fn leaderboard(deps: Deps, contest_id: Uint128) -> StdResult<Vec<RankedTeamResponse>> {
    CONTESTS.load(deps.storage, contest_id.u128())?;

    let mut teams = TEAMS
        .prefix(contest_id.u128())
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<(u128, Team)>>>()?;

    teams.sort_by(|a, b| {
        b.1.total_points
            .cmp(&a.1.total_points)
            .then_with(|| a.1.created_at.cmp(&b.1.created_at))
            .then_with(|| a.0.cmp(&b.0))
    });

    Ok(teams
        .into_iter()
        .enumerate()
        .map(|(i, (team_id, team))| RankedTeamResponse {
            rank: Uint64::new(i as u64 + 1),
            team_id: Uint128::new(team_id),
            owner: team.owner,
            total_points: team.total_points,
        })
        .collect())
}

pub fn withdrawal(deps: Deps, withdrawal_id: Uint128) -> StdResult<Withdrawal> {
    WITHDRAWALS.load(deps.storage, withdrawal_id.u128())
}

pub fn has_role(deps: Deps, addr: String, role: Role) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&addr)?;

    Ok(crate::state::has_role(deps.storage, &addr, role))
}
