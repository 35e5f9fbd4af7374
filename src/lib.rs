pub mod app;
pub mod cli;
pub mod config;
pub mod crawler;
pub mod error;
pub mod invocation;
pub mod logger;
pub mod range;
pub mod utils;

pub use crawler::{Downloader, Fetch, FetchTarget, RangeCrawler, RunSummary};
pub use error::Error;
pub use range::{FetchRange, IndexFormat};
