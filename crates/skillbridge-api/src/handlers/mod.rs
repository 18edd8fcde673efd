//! Route handlers organized by domain.

pub mod activity;
pub mod health;
