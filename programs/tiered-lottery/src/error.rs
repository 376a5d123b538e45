use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // --- configuration ---
    #[msg("Incorrect time values")]
    InvalidTimeValues,
    #[msg("Reward token is not a deployed token mint")]
    RewardTokenNotDeployed,
    #[msg("Lottery cap can't be zero")]
    ZeroLotteryCap,
    #[msg("Incorrect organization shares count")]
    IncorrectOrganizationSharesCount,
    #[msg("Incorrect organization shares")]
    IncorrectOrganizationShare,
    #[msg("Total shares sum must be 100%")]
    OrganizationSharesNotFull,
    #[msg("Too many tiers")]
    TooManyTiers,
    #[msg("First tier must be Jackpot")]
    FirstTierNotJackpot,
    #[msg("There must be 1 winner in Jackpot tier")]
    JackpotWinnersCount,
    #[msg("Incorrect tier values")]
    IncorrectTierValues,
    #[msg("Incorrect tier order")]
    IncorrectTierOrder,
    #[msg("Winners share can't be 0 for random tier")]
    ZeroRandomTierShare,
    #[msg("Winners share can't exceed 100% for random tier")]
    RandomTierShareTooHigh,
    #[msg("Winners count can't be 0 for fixed tier")]
    ZeroFixedTierWinners,
    #[msg("Winners count can't exceed 100 per tier")]
    FixedTierWinnersTooHigh,
    #[msg("Organization winners count can't be 0 for fixed tier")]
    ZeroOrganizationQuota,
    #[msg("Total organization winners count does not match tier winners count")]
    OrganizationQuotaMismatch,
    #[msg("Organization shares do not match the registered organizations")]
    OrganizationSharesOutdated,
    #[msg("Ticket contract is already registered")]
    TicketContractAlreadyRegistered,
    #[msg("Role is already granted")]
    RoleAlreadyGranted,

    // --- lifecycle ---
    #[msg("Can't setup after lottery time")]
    SetupAfterLotteryTime,
    #[msg("Lottery configuration is frozen")]
    SetupFrozen,
    #[msg("Ticket registration is closed")]
    RegistrationClosed,
    #[msg("Lottery is not set up")]
    LotteryNotSetUp,
    #[msg("Burn period not finished yet")]
    TicketPeriodNotFinished,
    #[msg("Lottery already initialized")]
    LotteryAlreadyInitialized,
    #[msg("Lottery is not fully initialized")]
    LotteryNotFullyInitialized,
    #[msg("Lottery time not reached yet")]
    LotteryTimeNotReached,
    #[msg("Lottery already run")]
    LotteryAlreadyRun,
    #[msg("Randomness already fulfilled")]
    RandomnessAlreadyFulfilled,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not yet resolved")]
    RandomnessNotResolved,
    #[msg("Request is pending or lottery is not run")]
    RandomnessNotFulfilled,
    #[msg("Lottery already processed")]
    LotteryAlreadyProcessed,
    #[msg("Previous tier winners are not drawn yet")]
    TierOutOfOrder,
    #[msg("Invalid lottery phase transition")]
    InvalidPhaseTransition,

    // --- access ---
    #[msg("Caller is not authorized for this action")]
    Unauthorized,

    // --- lookups ---
    #[msg("Lottery ticket ID does not exist")]
    TicketNotFound,
    #[msg("Token ID does not exist")]
    OverCapWinnerNotFound,
    #[msg("Ticket contract is not registered")]
    TicketContractNotRegistered,
    #[msg("Ticket account does not support the ticket book interface")]
    InterfaceNotSupported,
    #[msg("Ticket book account was not supplied")]
    TicketBookMissing,
    #[msg("Tier does not exist")]
    UnknownTier,
    #[msg("Unknown randomness request")]
    UnknownRandomnessRequest,
    #[msg("Invalid randomness account")]
    InvalidRandomnessAccount,
    #[msg("Recipient token account is missing")]
    RecipientAccountMissing,
    #[msg("Role grant does not exist")]
    RoleNotFound,

    // --- invariants ---
    #[msg("Not enough tickets for the number of winners")]
    NotEnoughTickets,
    #[msg("Winners count exceeds storage capacity")]
    TooManyWinners,
    #[msg("Registry capacity exceeded")]
    CapacityExceeded,
    #[msg("Insufficient reward balance")]
    InsufficientRewardBalance,
    #[msg("Math overflow")]
    MathOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Phase,
    Authorization,
    ResourceNotFound,
    InvariantViolation,
}

impl LotteryError {
    pub fn kind(&self) -> ErrorKind {
        use LotteryError::*;
        match self {
            InvalidTimeValues
            | RewardTokenNotDeployed
            | ZeroLotteryCap
            | IncorrectOrganizationSharesCount
            | IncorrectOrganizationShare
            | OrganizationSharesNotFull
            | TooManyTiers
            | FirstTierNotJackpot
            | JackpotWinnersCount
            | IncorrectTierValues
            | IncorrectTierOrder
            | ZeroRandomTierShare
            | RandomTierShareTooHigh
            | ZeroFixedTierWinners
            | FixedTierWinnersTooHigh
            | ZeroOrganizationQuota
            | OrganizationQuotaMismatch
            | OrganizationSharesOutdated
            | TicketContractAlreadyRegistered
            | RoleAlreadyGranted => ErrorKind::Validation,

            SetupAfterLotteryTime
            | SetupFrozen
            | RegistrationClosed
            | LotteryNotSetUp
            | TicketPeriodNotFinished
            | LotteryAlreadyInitialized
            | LotteryNotFullyInitialized
            | LotteryTimeNotReached
            | LotteryAlreadyRun
            | RandomnessAlreadyFulfilled
            | RandomnessAlreadyRevealed
            | RandomnessNotResolved
            | RandomnessNotFulfilled
            | LotteryAlreadyProcessed
            | TierOutOfOrder
            | InvalidPhaseTransition => ErrorKind::Phase,

            Unauthorized => ErrorKind::Authorization,

            TicketNotFound
            | OverCapWinnerNotFound
            | TicketContractNotRegistered
            | InterfaceNotSupported
            | TicketBookMissing
            | UnknownTier
            | UnknownRandomnessRequest
            | InvalidRandomnessAccount
            | RecipientAccountMissing
            | RoleNotFound => ErrorKind::ResourceNotFound,

            NotEnoughTickets
            | TooManyWinners
            | CapacityExceeded
            | InsufficientRewardBalance
            | MathOverflow => ErrorKind::InvariantViolation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_covers_lifecycle_and_lookup_failures() {
        assert_eq!(LotteryError::OrganizationSharesNotFull.kind(), ErrorKind::Validation);
        assert_eq!(LotteryError::LotteryAlreadyProcessed.kind(), ErrorKind::Phase);
        assert_eq!(LotteryError::Unauthorized.kind(), ErrorKind::Authorization);
        assert_eq!(LotteryError::OverCapWinnerNotFound.kind(), ErrorKind::ResourceNotFound);
        assert_eq!(LotteryError::NotEnoughTickets.kind(), ErrorKind::InvariantViolation);
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let a: u32 = LotteryError::ZeroRandomTierShare.into();
        let b: u32 = LotteryError::ZeroFixedTierWinners.into();
        assert_ne!(a, b);
    }
}
