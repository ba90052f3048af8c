// src/core.rs
pub mod cloud;
pub mod filter;
pub mod input;
pub mod report;
pub mod stopwords;
pub mod tokenize;
