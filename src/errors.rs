pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_NO_VOTING_POWER: &str = "No voting power";
pub const ERR_VOTING_CLOSED: &str = "Voting is closed";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_TOO_EARLY: &str = "Voting period has not ended";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_NOT_APPROVED: &str = "Proposal not approved";
pub const ERR_OVERFLOW: &str = "Overflow";
pub const ERR_INVALID_VOTING_PERIOD: &str = "Invalid voting period";
pub const ERR_INVALID_TOKEN_ADDRESS: &str = "Invalid token address";
