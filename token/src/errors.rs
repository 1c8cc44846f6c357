pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_OVERFLOW: &str = "Overflow";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
