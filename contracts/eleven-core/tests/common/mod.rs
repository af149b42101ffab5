#![allow(dead_code)]

use anyhow::Result;
use cosmwasm_std::{Addr, Empty, Uint128, Uint64};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use eleven_core::contract::{execute, instantiate, migrate, query};
use eleven_core::msg::{
    AccountResponse, ContestResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RoleMsg, TeamMsg,
};
use eleven_core::state::{PlayerSlot, Role};
use prize_table::{PrizeTableUnchecked, PrizeTier};

pub const MIN_WITHDRAWAL: u128 = 100;

pub struct Platform {
    pub app: App,
    pub core: Addr,
    pub code_id: u64,
    pub owner: Addr,
    pub gateway: Addr,
    pub scorer: Addr,
    pub manager: Addr,
}

pub fn contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query).with_migrate(migrate))
}

pub fn setup() -> Result<Platform> {
    let mut app = App::default();
    let owner = app.api().addr_make("owner");
    let gateway = app.api().addr_make("gateway");
    let scorer = app.api().addr_make("scorer");
    let manager = app.api().addr_make("manager");

    let code_id = app.store_code(contract());
    let core = app.instantiate_contract(
        code_id,
        owner.clone(),
        &InstantiateMsg {
            owner: owner.to_string(),
            min_withdrawal: Uint128::new(MIN_WITHDRAWAL),
        },
        &[],
        "eleven-core",
        Some(owner.to_string()),
    )?;

    app.execute_contract(
        owner.clone(),
        core.clone(),
        &ExecuteMsg::UpdateRoles {
            to_add: vec![
                RoleMsg {
                    addr: gateway.to_string(),
                    role: Role::PaymentGateway,
                },
                RoleMsg {
                    addr: scorer.to_string(),
                    role: Role::Scorer,
                },
                RoleMsg {
                    addr: manager.to_string(),
                    role: Role::ContestManager,
                },
            ],
            to_remove: vec![],
        },
        &[],
    )?;

    Ok(Platform {
        app,
        core,
        code_id,
        owner,
        gateway,
        scorer,
        manager,
    })
}

impl Platform {
    pub fn user(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    /// Full deposit flow: order created by the account, confirmed by the gateway.
    pub fn fund(&mut self, account: &Addr, amount: u128) -> Result<()> {
        let core = self.core.clone();
        let gateway = self.gateway.clone();

        let res = self.app.execute_contract(
            account.clone(),
            core.clone(),
            &ExecuteMsg::CreateOrder {
                amount: Uint128::new(amount),
            },
            &[],
        )?;
        let order_id = attr(&res, "order_id").unwrap();

        self.app.execute_contract(
            gateway,
            core,
            &ExecuteMsg::ConfirmPayment {
                order_id: order_id.parse::<u128>()?.into(),
                payment_reference: format!("utr-{}-{}", order_id, account),
            },
            &[],
        )?;

        Ok(())
    }

    pub fn create_contest(
        &mut self,
        entry_fee: u128,
        max_teams: u64,
        tiers: Vec<PrizeTier>,
    ) -> Result<Uint128> {
        self.create_contest_with(entry_fee, max_teams, false, tiers)
    }

    pub fn create_contest_with(
        &mut self,
        entry_fee: u128,
        max_teams: u64,
        allow_multiple_entries: bool,
        tiers: Vec<PrizeTier>,
    ) -> Result<Uint128> {
        let manager = self.manager.clone();
        let core = self.core.clone();

        let res = self.app.execute_contract(
            manager,
            core,
            &ExecuteMsg::CreateContest {
                match_ref: "match-2026-04-21".to_string(),
                entry_fee: Uint128::new(entry_fee),
                max_teams: Uint64::new(max_teams),
                allow_multiple_entries,
                prize_table: PrizeTableUnchecked::new(tiers),
            },
            &[],
        )?;

        Ok(attr(&res, "contest_id").unwrap().parse::<u128>()?.into())
    }

    pub fn join(&mut self, account: &Addr, contest_id: Uint128, team: TeamMsg) -> Result<AppResponse> {
        let core = self.core.clone();
        self.app.execute_contract(
            account.clone(),
            core,
            &ExecuteMsg::JoinContest { contest_id, team },
            &[],
        )
    }

    pub fn account(&self, addr: &Addr) -> AccountResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.core.clone(),
                &QueryMsg::Account {
                    addr: addr.to_string(),
                },
            )
            .unwrap()
    }

    pub fn balance(&self, addr: &Addr) -> Uint128 {
        self.account(addr).balance
    }

    pub fn contest(&self, contest_id: Uint128) -> ContestResponse {
        self.app
            .wrap()
            .query_wasm_smart(self.core.clone(), &QueryMsg::Contest { contest_id })
            .unwrap()
    }
}

pub fn attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn tier(from_rank: u64, to_rank: u64, amount: u128) -> PrizeTier {
    PrizeTier {
        from_rank: Uint64::new(from_rank),
        to_rank: Uint64::new(to_rank),
        amount: Uint128::new(amount),
    }
}

/// An 11-player roster with distinct player ids derived from `prefix`.
pub fn team(prefix: &str) -> TeamMsg {
    let roster = (1..=11)
        .map(|i| PlayerSlot {
            player_id: format!("{}-{}", prefix, i),
            role: match i {
                1 => "wicket_keeper".to_string(),
                2..=6 => "batter".to_string(),
                7..=8 => "all_rounder".to_string(),
                _ => "bowler".to_string(),
            },
        })
        .collect();

    TeamMsg {
        roster,
        captain: format!("{}-1", prefix),
        vice_captain: format!("{}-2", prefix),
    }
}
