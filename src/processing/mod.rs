//! Document scoring and skill-gap pipeline

pub mod catalog;
pub mod document;
pub mod text_processor;
pub mod entities;
pub mod skill_matcher;
pub mod similarity;
pub mod ranking;
pub mod analyzer;
