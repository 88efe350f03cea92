//! Business layer: the envelope-returning CRUD contract, one service per
//! entity, and the repositories they run on.

pub mod crud;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod services;

#[cfg(test)]
mod test_support;

pub use crud::{CrudInterface, EntityResponseMapper};
pub use errors::ServiceError;
