pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod storage;

pub use application::BankService;
pub use domain::*;
pub use storage::{CsvStore, NullStore, Store};
