pub mod graphql;
pub mod memory;
