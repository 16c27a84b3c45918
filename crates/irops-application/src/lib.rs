pub mod canned;
pub mod context;
pub mod dashboard;
pub mod responder;

pub use crate::dashboard::{DashboardService, DashboardView};
pub use crate::responder::{Reply, Responder};
