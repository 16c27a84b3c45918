pub mod agent;
pub mod chat;
pub mod dashboard;
pub mod utils;
