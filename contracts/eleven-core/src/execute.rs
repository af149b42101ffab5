use cosmwasm_std::{
    ensure, DepsMut, Env, MessageInfo, Response, StdError, Uint128, Uint64,
};
use cw_ownable::assert_owner;
use itertools::Itertools as _;
use prize_table::PrizeTableUnchecked;

use crate::{
    ledger,
    msg::{RoleMsg, TeamMsg, TeamPointsMsg},
    query,
    state::{
        assert_role, next_id, Contest, PaymentRecord, PaymentStatus, Role, Team, Withdrawal,
        WithdrawalStatus, ACCOUNTS, CONFIG, CONTESTS, CONTEST_COUNT, ENTRY_COUNTS, ORDERS,
        ORDER_COUNT, PAYMENT_REFS, ROLES, TEAMS, TEAM_COUNT, WITHDRAWALS, WITHDRAWAL_COUNT,
    },
    ContractError,
};

/// Roster size is fixed by the match format
pub const ROSTER_SIZE: u32 = 11;

pub fn update_roles(
    deps: DepsMut,
    info: MessageInfo,
    to_add: Vec<RoleMsg>,
    to_remove: Vec<RoleMsg>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let added = to_add.len();
    let removed = to_remove.len();

    for role_msg in to_add {
        let addr = deps.api.addr_validate(&role_msg.addr)?;
        ROLES.save(deps.storage, (&addr, role_msg.role.as_str()), &())?;
    }
    for role_msg in to_remove {
        let addr = deps.api.addr_validate(&role_msg.addr)?;
        ROLES.remove(deps.storage, (&addr, role_msg.role.as_str()));
    }

    Ok(Response::new()
        .add_attribute("action", "update_roles")
        .add_attribute("added", added.to_string())
        .add_attribute("removed", removed.to_string()))
}

pub fn create_contest(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    match_ref: String,
    entry_fee: Uint128,
    max_teams: Uint64,
    allow_multiple_entries: bool,
    prize_table: PrizeTableUnchecked,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::ContestManager)?;

    ensure!(!entry_fee.is_zero(), ContractError::InvalidAmount {});
    ensure!(
        !max_teams.is_zero(),
        ContractError::StdError(StdError::generic_err(
            "Max teams must be greater than zero"
        ))
    );

    let prize_table = prize_table.into_checked(max_teams)?;
    let prize_pool = prize_table.total_payout()?;

    let contest_id = next_id(deps.storage, &CONTEST_COUNT)?;
    CONTESTS.save(
        deps.storage,
        contest_id,
        &Contest {
            match_ref: match_ref.clone(),
            entry_fee,
            max_teams,
            joined_teams: Uint64::zero(),
            active: true,
            settled: false,
            allow_multiple_entries,
            prize_table,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "create_contest")
        .add_attribute("contest_id", contest_id.to_string())
        .add_attribute("match_ref", match_ref)
        .add_attribute("entry_fee", entry_fee)
        .add_attribute("max_teams", max_teams.to_string())
        .add_attribute("prize_pool", prize_pool))
}

pub fn close_contest(
    deps: DepsMut,
    info: MessageInfo,
    contest_id: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::ContestManager)?;

    let mut contest = CONTESTS
        .may_load(deps.storage, contest_id.u128())?
        .ok_or(ContractError::ContestNotFound { contest_id })?;

    ensure!(contest.active, ContractError::ContestClosed {});
    contest.active = false;
    CONTESTS.save(deps.storage, contest_id.u128(), &contest)?;

    Ok(Response::new()
        .add_attribute("action", "close_contest")
        .add_attribute("contest_id", contest_id))
}

pub fn create_order(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure!(!amount.is_zero(), ContractError::InvalidAmount {});

    let order_id = next_id(deps.storage, &ORDER_COUNT)?;
    ORDERS.save(
        deps.storage,
        order_id,
        &PaymentRecord {
            account: info.sender.clone(),
            amount,
            status: PaymentStatus::Created,
            payment_reference: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "create_order")
        .add_attribute("order_id", order_id.to_string())
        .add_attribute("account", info.sender)
        .add_attribute("amount", amount))
}

pub fn confirm_payment(
    deps: DepsMut,
    info: MessageInfo,
    order_id: Uint128,
    payment_reference: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::PaymentGateway)?;

    let mut order = ORDERS
        .may_load(deps.storage, order_id.u128())?
        .ok_or(ContractError::OrderNotFound { order_id })?;

    match order.status {
        // Redelivered confirmation: safe to acknowledge, nothing to apply
        PaymentStatus::Completed => {
            ensure!(
                order.payment_reference.as_deref() == Some(payment_reference.as_str()),
                ContractError::PaymentReferenceMismatch {}
            );

            return Ok(Response::new()
                .add_attribute("action", "confirm_payment")
                .add_attribute("order_id", order_id)
                .add_attribute("result", "duplicate"));
        }
        PaymentStatus::Failed => return Err(ContractError::OrderNotPending {}),
        PaymentStatus::Created => {}
    }

    // A reference bound to this order would imply Completed, handled above
    if PAYMENT_REFS.has(deps.storage, &payment_reference) {
        return Err(ContractError::DuplicatePaymentReference {
            reference: payment_reference,
        });
    }

    order.status = PaymentStatus::Completed;
    order.payment_reference = Some(payment_reference.clone());
    ORDERS.save(deps.storage, order_id.u128(), &order)?;
    PAYMENT_REFS.save(deps.storage, &payment_reference, &order_id)?;

    let balance = ledger::credit(deps.storage, &order.account, order.amount)?;

    Ok(Response::new()
        .add_attribute("action", "confirm_payment")
        .add_attribute("order_id", order_id)
        .add_attribute("payment_reference", payment_reference)
        .add_attribute("account", order.account)
        .add_attribute("amount", order.amount)
        .add_attribute("balance", balance))
}

pub fn fail_payment(
    deps: DepsMut,
    info: MessageInfo,
    order_id: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::PaymentGateway)?;

    let mut order = ORDERS
        .may_load(deps.storage, order_id.u128())?
        .ok_or(ContractError::OrderNotFound { order_id })?;

    ensure!(
        order.status == PaymentStatus::Created,
        ContractError::OrderNotPending {}
    );

    order.status = PaymentStatus::Failed;
    ORDERS.save(deps.storage, order_id.u128(), &order)?;

    Ok(Response::new()
        .add_attribute("action", "fail_payment")
        .add_attribute("order_id", order_id)
        .add_attribute("account", order.account))
}

pub fn join_contest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contest_id: Uint128,
    team: TeamMsg,
) -> Result<Response, ContractError> {
    // Shape checks reject before any write
    validate_team(&team)?;

    let mut contest = CONTESTS
        .may_load(deps.storage, contest_id.u128())?
        .ok_or(ContractError::ContestNotFound { contest_id })?;

    ensure!(contest.active, ContractError::ContestClosed {});
    ensure!(
        contest.joined_teams < contest.max_teams,
        ContractError::ContestFull {}
    );

    let entries = ENTRY_COUNTS
        .may_load(deps.storage, (contest_id.u128(), &info.sender))?
        .unwrap_or_default();
    if !contest.allow_multiple_entries {
        ensure!(entries == 0, ContractError::AlreadyJoined {});
    }

    // Slot reservation; a failure below discards it with the rest of the transaction
    contest.joined_teams = contest.joined_teams.checked_add(Uint64::one())?;
    CONTESTS.save(deps.storage, contest_id.u128(), &contest)?;

    let balance = ledger::debit(deps.storage, &info.sender, contest.entry_fee)?;

    let team_id = next_id(deps.storage, &TEAM_COUNT)?;
    TEAMS.save(
        deps.storage,
        (contest_id.u128(), team_id),
        &Team {
            owner: info.sender.clone(),
            roster: team.roster,
            captain: team.captain,
            vice_captain: team.vice_captain,
            total_points: Uint64::zero(),
            created_at: env.block.time,
        },
    )?;
    ENTRY_COUNTS.save(
        deps.storage,
        (contest_id.u128(), &info.sender),
        &(entries + 1),
    )?;

    ACCOUNTS.update(
        deps.storage,
        &info.sender,
        |account| -> Result<_, ContractError> {
            let mut account = account.unwrap_or_default();
            account.total_contests_joined =
                account.total_contests_joined.checked_add(Uint64::one())?;
            Ok(account)
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "join_contest")
        .add_attribute("contest_id", contest_id)
        .add_attribute("team_id", team_id.to_string())
        .add_attribute("account", info.sender)
        .add_attribute("entry_fee", contest.entry_fee)
        .add_attribute("balance", balance)
        .add_attribute("joined_teams", contest.joined_teams.to_string()))
}

fn validate_team(team: &TeamMsg) -> Result<(), ContractError> {
    ensure!(
        team.roster.len() as u32 == ROSTER_SIZE,
        ContractError::InvalidRosterSize {
            expected: ROSTER_SIZE,
            actual: team.roster.len() as u32,
        }
    );

    if let Some(player_id) = team
        .roster
        .iter()
        .map(|slot| &slot.player_id)
        .duplicates()
        .next()
    {
        return Err(ContractError::DuplicatePlayer {
            player_id: player_id.clone(),
        });
    }

    let in_roster = |id: &String| team.roster.iter().any(|slot| &slot.player_id == id);
    ensure!(
        team.captain != team.vice_captain
            && in_roster(&team.captain)
            && in_roster(&team.vice_captain),
        ContractError::InvalidCaptaincy {}
    );

    Ok(())
}

pub fn request_withdrawal(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    destination: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure!(
        amount >= config.min_withdrawal,
        ContractError::BelowMinimum {
            minimum: config.min_withdrawal,
        }
    );

    // Debit up front so pending settlement funds cannot be requested twice
    let balance = ledger::debit(deps.storage, &info.sender, amount)?;

    let withdrawal_id = next_id(deps.storage, &WITHDRAWAL_COUNT)?;
    WITHDRAWALS.save(
        deps.storage,
        withdrawal_id,
        &Withdrawal {
            account: info.sender.clone(),
            amount,
            destination: destination.clone(),
            status: WithdrawalStatus::Pending,
            requested_at: env.block.time,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "request_withdrawal")
        .add_attribute("withdrawal_id", withdrawal_id.to_string())
        .add_attribute("account", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("balance", balance)
        .add_attribute("destination", destination))
}

pub fn complete_withdrawal(
    deps: DepsMut,
    info: MessageInfo,
    withdrawal_id: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::PaymentGateway)?;

    let mut withdrawal = WITHDRAWALS
        .may_load(deps.storage, withdrawal_id.u128())?
        .ok_or(ContractError::WithdrawalNotFound { withdrawal_id })?;

    ensure!(
        withdrawal.status == WithdrawalStatus::Pending,
        ContractError::WithdrawalNotPending {}
    );

    withdrawal.status = WithdrawalStatus::Completed;
    WITHDRAWALS.save(deps.storage, withdrawal_id.u128(), &withdrawal)?;

    Ok(Response::new()
        .add_attribute("action", "complete_withdrawal")
        .add_attribute("withdrawal_id", withdrawal_id)
        .add_attribute("account", withdrawal.account)
        .add_attribute("amount", withdrawal.amount))
}

pub fn reverse_withdrawal(
    deps: DepsMut,
    info: MessageInfo,
    withdrawal_id: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::PaymentGateway)?;

    let mut withdrawal = WITHDRAWALS
        .may_load(deps.storage, withdrawal_id.u128())?
        .ok_or(ContractError::WithdrawalNotFound { withdrawal_id })?;

    ensure!(
        withdrawal.status == WithdrawalStatus::Pending,
        ContractError::WithdrawalNotPending {}
    );

    withdrawal.status = WithdrawalStatus::Reversed;
    WITHDRAWALS.save(deps.storage, withdrawal_id.u128(), &withdrawal)?;

    // Compensating credit for the request-time debit
    let balance = ledger::credit(deps.storage, &withdrawal.account, withdrawal.amount)?;

    Ok(Response::new()
        .add_attribute("action", "reverse_withdrawal")
        .add_attribute("withdrawal_id", withdrawal_id)
        .add_attribute("account", withdrawal.account)
        .add_attribute("amount", withdrawal.amount)
        .add_attribute("balance", balance))
}

pub fn update_team_points(
    deps: DepsMut,
    info: MessageInfo,
    contest_id: Uint128,
    updates: Vec<TeamPointsMsg>,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::Scorer)?;

    let contest = CONTESTS
        .may_load(deps.storage, contest_id.u128())?
        .ok_or(ContractError::ContestNotFound { contest_id })?;
    ensure!(!contest.settled, ContractError::AlreadySettled {});

    let updated = updates.len();
    for update in updates {
        TEAMS.update(
            deps.storage,
            (contest_id.u128(), update.team_id.u128()),
            |team| -> Result<_, ContractError> {
                match team {
                    Some(mut team) => {
                        team.total_points = update.total_points;
                        Ok(team)
                    }
                    None => Err(ContractError::TeamNotFound {
                        team_id: update.team_id,
                    }),
                }
            },
        )?;
    }

    Ok(Response::new()
        .add_attribute("action", "update_team_points")
        .add_attribute("contest_id", contest_id)
        .add_attribute("teams", updated.to_string()))
}

pub fn settle_contest(
    deps: DepsMut,
    info: MessageInfo,
    contest_id: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, &info.sender, Role::ContestManager)?;

    let mut contest = CONTESTS
        .may_load(deps.storage, contest_id.u128())?
        .ok_or(ContractError::ContestNotFound { contest_id })?;

    ensure!(!contest.active, ContractError::ContestActive {});
    ensure!(!contest.settled, ContractError::AlreadySettled {});

    let ranked = query::leaderboard(deps.as_ref(), contest_id)?;

    let mut winners: u32 = 0;
    let mut total_paid = Uint128::zero();
    for entry in &ranked {
        if let Some(amount) = contest.prize_table.payout_for_rank(entry.rank) {
            ledger::credit(deps.storage, &entry.owner, amount)?;
            ACCOUNTS.update(
                deps.storage,
                &entry.owner,
                |account| -> Result<_, ContractError> {
                    let mut account = account.unwrap_or_default();
                    account.total_winnings = account.total_winnings.checked_add(amount)?;
                    Ok(account)
                },
            )?;

            winners += 1;
            total_paid = total_paid.checked_add(amount)?;
        }
    }

    contest.settled = true;
    CONTESTS.save(deps.storage, contest_id.u128(), &contest)?;

    Ok(Response::new()
        .add_attribute("action", "settle_contest")
        .add_attribute("contest_id", contest_id)
        .add_attribute("winners", winners.to_string())
        .add_attribute("total_paid", total_paid))
}
