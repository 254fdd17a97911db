pub mod api_client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod fixtures;
pub mod http_client;
pub mod lineups;
pub mod ratings;
pub mod state;
pub mod store;
pub mod votes;
