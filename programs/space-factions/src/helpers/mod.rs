pub mod ledger;
pub mod messages;
pub mod query;
