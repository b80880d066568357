use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};

use crate::constants::{CONFIG_SEED, NUMBERS_PER_TICKET, PRIZE_TIERS, VAULT_SEED};
use crate::error::LotteryError;
use crate::events::{FundsWithdrawn, PrizeMultiplierUpdated, TicketPriceUpdated};
use crate::state::LotteryConfig;

/// Accounts required to create the settlement configuration.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The deployer; becomes the operator authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + LotteryConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, LotteryConfig>,

    pub system_program: Program<'info, System>,
}

/// Accounts for the operator-gated configuration setters.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ LotteryError::NotAuthorized,
    )]
    pub config: Account<'info, LotteryConfig>,
}

/// Accounts required to move pooled funds out to the treasury's recipient.
#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    pub treasury: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = treasury @ LotteryError::NotAuthorized,
    )]
    pub config: Account<'info, LotteryConfig>,

    /// CHECK: data-less PDA holding the pooled lamports; only its balance
    /// moves, never its data.
    #[account(mut, seeds = [VAULT_SEED], bump)]
    pub vault: AccountInfo<'info>,

    /// CHECK: destination chosen by the treasury; receives lamports only.
    #[account(mut)]
    pub recipient: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the singleton configuration: the payer becomes the operator, the
/// oracle and treasury roles are fixed at initialization, and the prize
/// table starts all-zero (no tier pays until configured).
pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    ticket_price: u64,
    oracle: Pubkey,
    treasury: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.authority = ctx.accounts.payer.key();
    config.oracle = oracle;
    config.treasury = treasury;
    config.ticket_price = ticket_price;
    config.prize_multipliers = [0; PRIZE_TIERS];
    config.current_period_id = 0;
    config.next_ticket_id = 1;
    Ok(())
}

/// Updates the ticket price; effective for subsequent purchases only.
pub fn process_set_ticket_price(ctx: Context<UpdateConfig>, new_price: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let old_price = config.ticket_price;
    config.ticket_price = new_price;

    emit!(TicketPriceUpdated {
        old_price,
        new_price,
    });
    Ok(())
}

/// Updates one prize tier; effective for subsequent purchases only, since
/// each ticket snapshots the table it was bought under.
pub fn process_set_prize_multiplier(
    ctx: Context<UpdateConfig>,
    matches: u8,
    multiplier: u64,
) -> Result<()> {
    require!(
        (matches as usize) <= NUMBERS_PER_TICKET,
        LotteryError::InvalidMatchCount
    );
    ctx.accounts.config.prize_multipliers[matches as usize] = multiplier;

    emit!(PrizeMultiplierUpdated {
        matches,
        multiplier,
    });
    Ok(())
}

/// Moves pooled lamports out of the vault to a recipient of the treasury's
/// choosing.
pub fn process_withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
    require!(
        amount <= ctx.accounts.vault.lamports(),
        LotteryError::InsufficientPrizePool
    );

    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &[ctx.bumps.vault]];
    invoke_signed(
        &system_instruction::transfer(
            &ctx.accounts.vault.key(),
            &ctx.accounts.recipient.key(),
            amount,
        ),
        &[
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.recipient.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[vault_seeds],
    )?;

    emit!(FundsWithdrawn {
        to: ctx.accounts.recipient.key(),
        amount,
    });
    Ok(())
}
