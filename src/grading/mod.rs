pub mod classifier;
pub mod ledger;
pub mod session;

pub use classifier::classify;
pub use ledger::TaskScoreLedger;
pub use session::GradingSession;
