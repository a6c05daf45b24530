//! Command line plumbing for the `llm-compare` binary.
pub mod cli;
pub mod generate;
