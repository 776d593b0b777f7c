pub mod check;
pub mod consult;
pub mod query;
