//! Opportunity values referenced by notifications.

pub mod status;

pub use status::OpportunityStatus;
