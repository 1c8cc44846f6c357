multiversx_sc::imports!();

use crate::errors::ERR_PROPOSAL_NOT_FOUND;
use crate::types::Proposal;

/// Append-only proposal records and per-proposal voter sets.
///
/// Pure data container: the mutators below do not re-check deadlines or
/// duplicate votes. The governance engine validates before calling them.
#[multiversx_sc::module]
pub trait ProposalStoreModule {
    /// Stores a fresh proposal under the next sequential id (first id is 1).
    fn append_proposal(
        &self,
        description: ManagedBuffer,
        proposer: ManagedAddress,
        deadline: u64,
    ) -> u64 {
        let proposal_id = self.proposal_count().get() + 1;

        let proposal = Proposal {
            id: proposal_id,
            description,
            proposer,
            deadline,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        proposal_id
    }

    fn get_proposal_or_fail(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        proposal_mapper.get()
    }

    fn record_vote(
        &self,
        proposal_id: u64,
        support: bool,
        weight: &BigUint,
        voter: &ManagedAddress,
    ) {
        self.proposals(proposal_id).update(|proposal| {
            if support {
                proposal.yes_votes += weight;
            } else {
                proposal.no_votes += weight;
            }
        });
        self.voters(proposal_id).insert(voter.clone());
    }

    /// Not idempotent-safe: callers check `executed` first.
    fn mark_executed(&self, proposal_id: u64) {
        self.proposals(proposal_id)
            .update(|proposal| proposal.executed = true);
    }

    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(voter)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
