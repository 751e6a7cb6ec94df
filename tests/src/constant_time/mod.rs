//! Statistical timing checks for constant-time operations
pub mod config;
pub mod tester;

pub use config::TestConfig;
pub use tester::{describe, TimingAnalysis, TimingTester};
