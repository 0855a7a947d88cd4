//! Token issuing and password hashing primitives.
//!
//! These helpers are pure and do not touch the database; `service::user` combines them
//! with the user store, and `middleware::auth` uses them to authenticate requests.

pub mod jwt;
pub mod password;
