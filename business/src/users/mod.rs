//! Users admin domain module.
//!
//! Everything the users page needs, in one place:
//! - `types`: record and wire types for the rule API
//! - `schema`: the declarative column/field descriptor list
//! - `state`: page state (sort, pagination, selection, modals, forms)
//! - `api`: service client for the rule endpoints
//! - `handlers`: action handlers wrapping each mutating call plus notices
//! - `query`: list cache + refresh command
//! - `actions`: mutation flow cache + submit/remove commands

pub mod actions;
pub mod api;
pub mod handlers;
pub mod query;
pub mod schema;
pub mod state;
pub mod types;
