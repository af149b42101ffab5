use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint64};
use prize_table::{PrizeTable, PrizeTableUnchecked};

use crate::state::{PaymentRecord, PlayerSlot, Role, Withdrawal};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Smallest withdrawal the platform will settle
    pub min_withdrawal: Uint128,
}

#[cw_ownable::cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Grant or revoke operational capabilities
    /// Only callable by the owner
    UpdateRoles {
        to_add: Vec<RoleMsg>,
        to_remove: Vec<RoleMsg>,
    },
    CreateContest {
        match_ref: String,
        entry_fee: Uint128,
        max_teams: Uint64,
        allow_multiple_entries: bool,
        prize_table: PrizeTableUnchecked,
    },
    /// Stops further joins at match lock
    CloseContest {
        contest_id: Uint128,
    },
    /// Records a deposit order for the payment gateway; no balance effect
    CreateOrder {
        amount: Uint128,
    },
    /// Applies a gateway-confirmed payment to the order's account exactly once
    ConfirmPayment {
        order_id: Uint128,
        payment_reference: String,
    },
    FailPayment {
        order_id: Uint128,
    },
    JoinContest {
        contest_id: Uint128,
        team: TeamMsg,
    },
    RequestWithdrawal {
        amount: Uint128,
        destination: String,
    },
    CompleteWithdrawal {
        withdrawal_id: Uint128,
    },
    /// Settlement failed out of band; restores the debited amount
    ReverseWithdrawal {
        withdrawal_id: Uint128,
    },
    UpdateTeamPoints {
        contest_id: Uint128,
        updates: Vec<TeamPointsMsg>,
    },
    /// Pays the prize breakup over the final leaderboard
    SettleContest {
        contest_id: Uint128,
    },
}

#[cw_serde]
pub struct RoleMsg {
    pub addr: String,
    pub role: Role,
}

#[cw_serde]
pub struct TeamMsg {
    pub roster: Vec<PlayerSlot>,
    pub captain: String,
    pub vice_captain: String,
}

#[cw_serde]
pub struct TeamPointsMsg {
    pub team_id: Uint128,
    pub total_points: Uint64,
}

#[cw_ownable::cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(AccountResponse)]
    Account { addr: String },
    #[returns(ContestResponse)]
    Contest { contest_id: Uint128 },
    #[returns(Vec<ContestResponse>)]
    Contests {
        start_after: Option<Uint128>,
        limit: Option<u32>,
    },
    #[returns(Uint128)]
    ContestCount {},
    #[returns(PaymentRecord)]
    Order { order_id: Uint128 },
    #[returns(TeamResponse)]
    Team {
        contest_id: Uint128,
        team_id: Uint128,
    },
    #[returns(Vec<RankedTeamResponse>)]
    Leaderboard { contest_id: Uint128 },
    #[returns(Withdrawal)]
    Withdrawal { withdrawal_id: Uint128 },
    #[returns(bool)]
    HasRole { addr: String, role: Role },
}

#[cw_serde]
pub struct AccountResponse {
    pub addr: Addr,
    pub balance: Uint128,
    pub total_winnings: Uint128,
    pub total_contests_joined: Uint64,
}

#[cw_serde]
pub struct ContestResponse {
    pub contest_id: Uint128,
    pub match_ref: String,
    pub entry_fee: Uint128,
    pub max_teams: Uint64,
    pub joined_teams: Uint64,
    pub active: bool,
    pub settled: bool,
    pub allow_multiple_entries: bool,
    pub prize_table: PrizeTable,
}

#[cw_serde]
pub struct TeamResponse {
    pub contest_id: Uint128,
    pub team_id: Uint128,
    pub owner: Addr,
    pub roster: Vec<PlayerSlot>,
    pub captain: String,
    pub vice_captain: String,
    pub total_points: Uint64,
    pub created_at: Timestamp,
}

#[cw_serde]
pub struct RankedTeamResponse {
    /// 1-based, derived at query time
    pub rank: Uint64,
    pub team_id: Uint128,
    pub owner: Addr,
    pub total_points: Uint64,
}

#[cw_serde]
pub enum MigrateMsg {
    FromCompatible {},
}
