#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod governance_dao_proxy;
pub mod proposal_store;
pub mod token_proxy;
pub mod types;

use errors::{
    ERR_ALREADY_EXECUTED, ERR_ALREADY_VOTED, ERR_INVALID_TOKEN_ADDRESS,
    ERR_INVALID_VOTING_PERIOD, ERR_NOT_APPROVED, ERR_NO_VOTING_POWER, ERR_OVERFLOW,
    ERR_TOO_EARLY, ERR_VOTING_CLOSED,
};
use types::{Proposal, ProposalState};

// ============================================================
// Constants
// ============================================================

/// Voting window used when the deployer does not pass one: 24 hours in seconds
const DEFAULT_VOTING_PERIOD: u64 = 86_400;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GovernanceDao: proposal_store::ProposalStoreModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, token_address: ManagedAddress, opt_voting_period: OptionalValue<u64>) {
        require!(
            self.blockchain().is_smart_contract(&token_address),
            ERR_INVALID_TOKEN_ADDRESS
        );

        let voting_period = opt_voting_period
            .into_option()
            .unwrap_or(DEFAULT_VOTING_PERIOD);
        require!(voting_period > 0, ERR_INVALID_VOTING_PERIOD);

        self.token_address().set(&token_address);
        self.voting_period().set(voting_period);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Any holder with a non-zero balance can propose.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        let balance = self.voting_power(&caller);
        require!(balance > 0u64, ERR_NO_VOTING_POWER);

        let now = self.blockchain().get_block_timestamp();
        let deadline = match now.checked_add(self.voting_period().get()) {
            Some(deadline) => deadline,
            None => sc_panic!(ERR_OVERFLOW),
        };

        let proposal_id = self.append_proposal(description, caller.clone(), deadline);

        self.proposal_created_event(proposal_id, &caller, deadline);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Yes/No voting weighted by token balance at vote time.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let proposal = self.get_proposal_or_fail(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(
            proposal.state_at(now) == ProposalState::Open,
            ERR_VOTING_CLOSED
        );
        require!(!self.has_voted(proposal_id, &caller), ERR_ALREADY_VOTED);

        // Weight is fixed here; later transfers do not touch the tally.
        let weight = self.voting_power(&caller);
        require!(weight > 0u64, ERR_NO_VOTING_POWER);

        self.record_vote(proposal_id, support, &weight, &caller);

        self.vote_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // After the deadline, once, if yes > no. Anyone can trigger it.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let proposal = self.get_proposal_or_fail(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.deadline, ERR_TOO_EARLY);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(proposal.is_approved(), ERR_NOT_APPROVED);

        self.mark_executed(proposal_id);
        self.on_proposal_executed(&proposal, &caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Current balance on the governance token.
    fn voting_power(&self, holder: &ManagedAddress) -> BigUint {
        let token_address = self.token_address().get();
        self.tx()
            .to(&token_address)
            .typed(token_proxy::TokenProxy)
            .balance_of(holder.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Execution effect. Proposals carry no on-chain payload, so the
    /// effect is the event; off-chain tooling acts on it.
    fn on_proposal_executed(&self, proposal: &Proposal<Self::Api>, executor: &ManagedAddress) {
        self.proposal_executed_event(proposal.id, executor, &proposal.yes_votes);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.get_proposal_or_fail(proposal_id)
    }

    /// Page of proposals starting at id `from` (0 is read as 1), at most `count` long.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for proposal_id in start..=end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        let proposal = self.get_proposal_or_fail(proposal_id);
        proposal.state_at(self.blockchain().get_block_timestamp())
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        deadline: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] executor: &ManagedAddress,
        yes_votes: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTokenAddress)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getVotingPeriod)]
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;
}
