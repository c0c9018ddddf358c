//! Resume ranker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, ResumeRankerError};
pub use config::Config;
pub use processing::analyzer::{BatchReport, DocumentFailure, GapAnalysis, ScreeningEngine};
pub use processing::catalog::SkillCatalog;
pub use processing::document::DocumentInput;
