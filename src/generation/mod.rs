// Generation service integration

pub mod client;
pub mod rate_limit;

pub use client::GenerationClient;
pub use rate_limit::is_rate_limit_signal;
