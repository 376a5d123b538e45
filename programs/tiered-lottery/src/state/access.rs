use anchor_lang::prelude::*;

/// Roles the lottery authority can hand out. The authority itself holds
/// every role implicitly.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Role {
    /// Registers campaign ticket contracts.
    Registrar,
    /// Drives initialization, the randomness request, the draw and settlement.
    Operator,
    /// Confirms pending over-cap payouts.
    Rewarder,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct RoleGrant {
    pub account: Pubkey,
    pub role: Role,
}

/// Mutating operations gated by `Lottery::is_authorized`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ManageRoles,
    Setup,
    RegisterTickets,
    Initialize,
    Run,
    Draw,
    RewardWinners,
    RewardOverCap,
    Withdraw,
}

impl Action {
    /// `None` means only the authority may act.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Action::ManageRoles | Action::Setup | Action::Withdraw => None,
            Action::RegisterTickets => Some(Role::Registrar),
            Action::Initialize | Action::Run | Action::Draw | Action::RewardWinners => {
                Some(Role::Operator)
            }
            Action::RewardOverCap => Some(Role::Rewarder),
        }
    }
}
