pub mod branch_reps;
pub mod branches;
pub mod user_sessions;
pub mod users;
