#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod governance_token_proxy;

use errors::{ERR_INSUFFICIENT_BALANCE, ERR_OVERFLOW, ERR_UNAUTHORIZED};

// ============================================================
// Constants
// ============================================================

/// Display precision, same as an 18-decimal ERC-20.
const DECIMALS: u32 = 18;

/// Supply is bounded by a 256-bit unsigned representation (2^256 - 1).
const MAX_SUPPLY_BYTES: [u8; 32] = [0xff; 32];

// ============================================================
// Contract
// ============================================================

/// Fungible ledger that supplies voting weight to the governance DAO.
/// Balances live in contract storage; the DAO only ever reads them.
#[multiversx_sc::contract]
pub trait GovernanceToken {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, name: ManagedBuffer, symbol: ManagedBuffer) {
        self.name().set(&name);
        self.symbol().set(&symbol);
        self.total_supply().set(BigUint::zero());
    }

    /// Metadata is fixed at deployment, nothing to migrate.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: mint
    // Owner only. Seeds the initial distribution at deploy time.
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_UNAUTHORIZED
        );

        let new_supply = &self.total_supply().get() + &amount;
        require!(new_supply <= self.max_supply(), ERR_OVERFLOW);

        self.balance_of(&to).update(|balance| *balance += &amount);
        self.total_supply().set(&new_supply);

        self.mint_event(&to, &amount);
    }

    // ========================================================
    // ENDPOINT: transfer
    // Moves balance between holders. Supply-preserving.
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let sender_balance = self.balance_of(&caller).get();
        require!(sender_balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balance_of(&caller).set(&sender_balance - &amount);
        self.balance_of(&to).update(|balance| *balance += &amount);

        self.transfer_event(&caller, &to, &amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(decimals)]
    fn decimals(&self) -> u32 {
        DECIMALS
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn max_supply(&self) -> BigUint {
        BigUint::from_bytes_be(&MAX_SUPPLY_BYTES)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(name)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(symbol)]
    #[storage_mapper("symbol")]
    fn symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance_of(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
