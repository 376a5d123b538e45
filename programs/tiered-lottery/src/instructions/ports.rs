//! On-chain implementations of the engine ports.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TransferChecked};
use switchboard_on_demand::accounts::RandomnessAccountData;
use switchboard_on_demand::{ON_DEMAND_DEVNET_PID, ON_DEMAND_MAINNET_PID};

use crate::engine::{RandomnessPort, RewardVault, TicketResolver};
use crate::error::LotteryError;
use crate::state::{CampaignTickets, TicketBook};

const BOOK_ORGANIZATION_OFFSET: usize = 8;
const BOOK_CAMPAIGN_OFFSET: usize = BOOK_ORGANIZATION_OFFSET + 32;
const BOOK_LEN_OFFSET: usize = BOOK_CAMPAIGN_OFFSET + 32;
const BOOK_HOLDERS_OFFSET: usize = BOOK_LEN_OFFSET + 4;

/// Fixed part of a ticket book. The holder list stays in the account data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketBookHeader {
    pub organization: Pubkey,
    pub campaign: Pubkey,
    pub ticket_count: u64,
}

fn read_pubkey(data: &[u8], offset: usize) -> Option<Pubkey> {
    let bytes = data.get(offset..offset.checked_add(32)?)?;
    Pubkey::try_from(bytes).ok()
}

fn read_book_header(data: &[u8]) -> Option<TicketBookHeader> {
    if data.get(..8)? != &TicketBook::DISCRIMINATOR[..] {
        return None;
    }
    let organization = read_pubkey(data, BOOK_ORGANIZATION_OFFSET)?;
    let campaign = read_pubkey(data, BOOK_CAMPAIGN_OFFSET)?;
    let len = data.get(BOOK_LEN_OFFSET..BOOK_HOLDERS_OFFSET)?;
    let ticket_count = u32::from_le_bytes(len.try_into().ok()?) as usize;

    let end = BOOK_HOLDERS_OFFSET.checked_add(ticket_count.checked_mul(32)?)?;
    (data.len() >= end).then_some(TicketBookHeader {
        organization,
        campaign,
        ticket_count: ticket_count as u64,
    })
}

/// Reads the header of a ticket book owned by `ticket_program`.
pub fn load_ticket_book(info: &AccountInfo, ticket_program: &Pubkey) -> Result<TicketBookHeader> {
    require_keys_eq!(
        *info.owner,
        *ticket_program,
        LotteryError::InterfaceNotSupported
    );
    let data = info.try_borrow_data()?;
    read_book_header(&data).ok_or_else(|| error!(LotteryError::InterfaceNotSupported))
}

/// Ticket books passed as remaining accounts, keyed by address. Accounts not
/// owned by the ticket program are ignored. Holders are read in place.
pub struct TicketBooks<'a, 'info> {
    books: BTreeMap<Pubkey, (&'a AccountInfo<'info>, TicketBookHeader)>,
}

impl<'a, 'info> TicketBooks<'a, 'info> {
    pub fn load(accounts: &'a [AccountInfo<'info>], ticket_program: &Pubkey) -> Result<Self> {
        let mut books = BTreeMap::new();
        for info in accounts.iter().filter(|info| info.owner == ticket_program) {
            books.insert(info.key(), (info, load_ticket_book(info, ticket_program)?));
        }
        Ok(Self { books })
    }

    fn book(&self, campaign: &CampaignTickets) -> Result<(&'a AccountInfo<'info>, TicketBookHeader)> {
        let (info, header) = self
            .books
            .get(&campaign.ticket_contract)
            .copied()
            .ok_or_else(|| error!(LotteryError::TicketBookMissing))?;
        require_keys_eq!(
            header.campaign,
            campaign.campaign,
            LotteryError::InterfaceNotSupported
        );
        Ok((info, header))
    }
}

impl TicketResolver for TicketBooks<'_, '_> {
    fn ticket_count(&self, campaign: &CampaignTickets) -> Result<u64> {
        Ok(self.book(campaign)?.1.ticket_count)
    }

    fn resolve_owner(&self, campaign: &CampaignTickets, local_id: u64) -> Result<Pubkey> {
        let (info, header) = self.book(campaign)?;
        require!(local_id < header.ticket_count, LotteryError::TicketNotFound);

        let data = info.try_borrow_data()?;
        read_pubkey(&data, BOOK_HOLDERS_OFFSET + local_id as usize * 32)
            .ok_or_else(|| error!(LotteryError::InterfaceNotSupported))
    }
}

/// Switchboard on-demand randomness account, read at `slot`.
pub struct SwitchboardRandomness<'a, 'info> {
    account: &'a AccountInfo<'info>,
    slot: u64,
}

impl<'a, 'info> SwitchboardRandomness<'a, 'info> {
    pub fn new(account: &'a AccountInfo<'info>, slot: u64) -> Result<Self> {
        let owner = account.owner.to_bytes();
        require!(
            owner == ON_DEMAND_MAINNET_PID.to_bytes() || owner == ON_DEMAND_DEVNET_PID.to_bytes(),
            LotteryError::InvalidRandomnessAccount
        );
        Ok(Self { account, slot })
    }

    fn snapshot(&self) -> Result<RandomnessAccountData> {
        require!(
            self.account.data_len() >= RandomnessAccountData::size(),
            LotteryError::InvalidRandomnessAccount
        );
        let data = RandomnessAccountData::parse(self.account.data.borrow())
            .map_err(|_| error!(LotteryError::InvalidRandomnessAccount))?;
        Ok(*data)
    }
}

impl RandomnessPort for SwitchboardRandomness<'_, '_> {
    fn request_random_number(&mut self) -> Result<Pubkey> {
        let data = self.snapshot()?;
        // The commitment must have been seeded in the previous slot.
        if data.seed_slot != self.slot.saturating_sub(1) {
            msg!("Seed slot: {}, current slot: {}", data.seed_slot, self.slot);
            return err!(LotteryError::RandomnessAlreadyRevealed);
        }
        Ok(self.account.key())
    }

    fn random_word(&self, request_id: &Pubkey) -> Result<[u8; 32]> {
        require_keys_eq!(
            *request_id,
            self.account.key(),
            LotteryError::InvalidRandomnessAccount
        );
        let data = self.snapshot()?;
        if data.reveal_slot != self.slot {
            msg!("Reveal slot: {}, current slot: {}", data.reveal_slot, self.slot);
            return err!(LotteryError::RandomnessNotResolved);
        }
        Ok(data.value)
    }
}

/// Reward vault token account owned by the vault authority PDA. Payouts go to
/// the recipient's token account for the reward mint, found among
/// `recipients`.
pub struct TokenVault<'a, 'info> {
    vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    decimals: u8,
    balance: u64,
    recipients: &'a [AccountInfo<'info>],
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> TokenVault<'a, 'info> {
    pub fn new(
        vault: &InterfaceAccount<'info, TokenAccount>,
        mint: &InterfaceAccount<'info, Mint>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        recipients: &'a [AccountInfo<'info>],
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            vault: vault.to_account_info(),
            mint: mint.to_account_info(),
            authority,
            token_program,
            decimals: mint.decimals,
            balance: vault.amount,
            recipients,
            signer_seeds,
        }
    }

    fn recipient_account(&self, owner: &Pubkey) -> Result<AccountInfo<'info>> {
        find_recipient_account(
            self.recipients,
            &self.token_program.key(),
            &self.mint.key(),
            owner,
        )
    }
}

/// Token account of `owner` for `mint` among `recipients`, owned by
/// `token_program`.
pub fn find_recipient_account<'info>(
    recipients: &[AccountInfo<'info>],
    token_program: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<AccountInfo<'info>> {
    for info in recipients.iter().filter(|info| info.owner == token_program) {
        let data = info.try_borrow_data()?;
        let Ok(account) = TokenAccount::try_deserialize(&mut &data[..]) else {
            continue;
        };
        if account.owner == *owner && account.mint == *mint {
            return Ok(info.clone());
        }
    }
    msg!("No reward token account supplied for {}", owner);
    err!(LotteryError::RecipientAccountMissing)
}

impl RewardVault for TokenVault<'_, '_> {
    fn balance(&self) -> u64 {
        self.balance
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require!(
            amount <= self.balance,
            LotteryError::InsufficientRewardBalance
        );
        if amount == 0 {
            return Ok(());
        }

        let recipient = self.recipient_account(to)?;
        let accounts = TransferChecked {
            from: self.vault.clone(),
            mint: self.mint.clone(),
            to: recipient,
            authority: self.authority.clone(),
        };
        token_interface::transfer_checked(
            CpiContext::new_with_signer(self.token_program.clone(), accounts, self.signer_seeds),
            amount,
            self.decimals,
        )?;
        self.balance -= amount;
        Ok(())
    }
}

/// Whether `info` is an initialized SPL Token or Token-2022 mint.
pub fn is_deployed_mint(info: &AccountInfo) -> bool {
    let token_owned = *info.owner == anchor_spl::token::ID || *info.owner == anchor_spl::token_2022::ID;
    token_owned
        && info
            .try_borrow_data()
            .map_or(false, |data| Mint::try_deserialize(&mut &data[..]).is_ok())
}
