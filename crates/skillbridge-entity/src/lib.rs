//! # skillbridge-entity
//!
//! Domain entity models for the SkillBridge activity feed. Database
//! entities derive `sqlx::FromRow`; enumerations stored in PostgreSQL
//! derive `sqlx::Type` and map onto the enum types created by the
//! migrations.

pub mod notification;
pub mod opportunity;
