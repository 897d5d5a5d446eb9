//! Small command line self-discipline tracker. Set the day's tasks, check in with how many got
//! done, and watch experience, titles and the unmet streak evolve. All state lives in three plain
//! text files, so it can be inspected or fixed by hand.
//!

pub mod cli;
pub mod config;
pub mod scoring;
pub mod storage;
pub mod tracker;
pub mod utils;
