pub mod agent;
pub mod client;
pub mod completion;
pub mod connection;
pub mod executor;
pub mod live;
pub mod profile;

pub use crate::client::{StatementGateway, WarehouseClient};
pub use crate::completion::{CompletionGateway, CompletionPrompt};
pub use crate::connection::ConnectionCache;
pub use crate::executor::QueryExecutor;
pub use crate::live::LiveDataSource;
pub use crate::profile::ConnectionProfile;
