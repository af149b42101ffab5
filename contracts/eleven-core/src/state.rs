use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Timestamp, Uint128, Uint64};
use cw_storage_plus::{Item, Map};
use prize_table::PrizeTable;

use crate::{
    msg::{ContestResponse, TeamResponse},
    ContractError,
};

#[cw_serde]
pub struct Config {
    pub min_withdrawal: Uint128,
}

/// Balance is written only by `ledger::credit` and `ledger::debit`.
#[cw_serde]
#[derive(Default)]
pub struct Account {
    pub balance: Uint128,
    pub total_winnings: Uint128,
    pub total_contests_joined: Uint64,
}

#[cw_serde]
pub struct Contest {
    pub match_ref: String,
    pub entry_fee: Uint128,
    pub max_teams: Uint64,
    pub joined_teams: Uint64,
    pub active: bool,
    pub settled: bool,
    pub allow_multiple_entries: bool,
    pub prize_table: PrizeTable,
}

impl Contest {
    pub fn into_response(self, contest_id: Uint128) -> ContestResponse {
        ContestResponse {
            contest_id,
            match_ref: self.match_ref,
            entry_fee: self.entry_fee,
            max_teams: self.max_teams,
            joined_teams: self.joined_teams,
            active: self.active,
            settled: self.settled,
            allow_multiple_entries: self.allow_multiple_entries,
            prize_table: self.prize_table,
        }
    }
}

#[cw_serde]
pub struct PlayerSlot {
    pub player_id: String,
    pub role: String,
}

#[cw_serde]
pub struct Team {
    pub owner: Addr,
    pub roster: Vec<PlayerSlot>,
    pub captain: String,
    pub vice_captain: String,
    /// Overwritten by the scoring feed; rank is never stored
    pub total_points: Uint64,
    pub created_at: Timestamp,
}

impl Team {
    pub fn into_response(self, contest_id: Uint128, team_id: Uint128) -> TeamResponse {
        TeamResponse {
            contest_id,
            team_id,
            owner: self.owner,
            roster: self.roster,
            captain: self.captain,
            vice_captain: self.vice_captain,
            total_points: self.total_points,
            created_at: self.created_at,
        }
    }
}

#[cw_serde]
pub enum PaymentStatus {
    Created,
    Completed,
    Failed,
}

#[cw_serde]
pub struct PaymentRecord {
    pub account: Addr,
    pub amount: Uint128,
    pub status: PaymentStatus,
    pub payment_reference: Option<String>,
}

#[cw_serde]
pub enum WithdrawalStatus {
    Pending,
    Completed,
    Reversed,
}

#[cw_serde]
pub struct Withdrawal {
    pub account: Addr,
    pub amount: Uint128,
    pub destination: String,
    pub status: WithdrawalStatus,
    pub requested_at: Timestamp,
}

#[cw_serde]
#[derive(Copy)]
pub enum Role {
    PaymentGateway,
    Scorer,
    ContestManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PaymentGateway => "payment_gateway",
            Role::Scorer => "scorer",
            Role::ContestManager => "contest_manager",
        }
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const ACCOUNTS: Map<&Addr, Account> = Map::new("accounts");

pub const CONTESTS: Map<u128, Contest> = Map::new("contests");
pub const CONTEST_COUNT: Item<Uint128> = Item::new("contest_count");

/// Keyed by (contest id, team id) so a contest's teams are one prefix range
pub const TEAMS: Map<(u128, u128), Team> = Map::new("teams");
pub const TEAM_COUNT: Item<Uint128> = Item::new("team_count");
pub const ENTRY_COUNTS: Map<(u128, &Addr), u32> = Map::new("entry_counts");

pub const ORDERS: Map<u128, PaymentRecord> = Map::new("orders");
pub const ORDER_COUNT: Item<Uint128> = Item::new("order_count");
/// External payment reference -> order id; enforces at-most-once application
pub const PAYMENT_REFS: Map<&str, Uint128> = Map::new("payment_refs");

pub const WITHDRAWALS: Map<u128, Withdrawal> = Map::new("withdrawals");
pub const WITHDRAWAL_COUNT: Item<Uint128> = Item::new("withdrawal_count");

pub const ROLES: Map<(&Addr, &str), ()> = Map::new("roles");

pub fn has_role(storage: &dyn Storage, addr: &Addr, role: Role) -> bool {
    ROLES.has(storage, (addr, role.as_str()))
}

pub fn assert_role(
    storage: &dyn Storage,
    addr: &Addr,
    role: Role,
) -> Result<(), ContractError> {
    if has_role(storage, addr, role) {
        Ok(())
    } else {
        Err(ContractError::Unauthorized {})
    }
}

pub fn next_id(storage: &mut dyn Storage, counter: &Item<Uint128>) -> Result<u128, ContractError> {
    Ok(counter
        .update(storage, |x| -> StdResult<_> { Ok(x.checked_add(Uint128::one())?) })?
        .u128())
}
