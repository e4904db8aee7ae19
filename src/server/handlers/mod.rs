pub mod health;

#[cfg(feature = "graphql")]
pub mod graphql;
