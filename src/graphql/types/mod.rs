pub mod branch;
pub mod branch_rep;
pub mod user;

pub use branch::Branch;
pub use branch_rep::BranchRep;
pub use user::User;
