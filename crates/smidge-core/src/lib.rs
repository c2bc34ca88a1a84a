// smidge-core: masking plans, seed derivation, and config errors for the smidge masking tool.

pub mod config;
pub mod error;
pub mod seed;
