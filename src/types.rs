multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State — derived from deadline and execution flag
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    /// Deadline not reached. Holders can vote yes/no.
    Open,
    /// Deadline reached, not executed. Executable if yes > no,
    /// otherwise rejected for good since tallies are frozen.
    ClosedPending,
    /// Terminal.
    Executed,
}

// ============================================================
// Proposal — the governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub description: ManagedBuffer<M>,
    pub proposer: ManagedAddress<M>,
    /// Block timestamp at which voting closes and execution opens.
    pub deadline: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn state_at(&self, now: u64) -> ProposalState {
        if self.executed {
            ProposalState::Executed
        } else if now < self.deadline {
            ProposalState::Open
        } else {
            ProposalState::ClosedPending
        }
    }

    /// Strict majority of cast weight. No quorum.
    pub fn is_approved(&self) -> bool {
        self.yes_votes > self.no_votes
    }
}
