pub mod config;
pub mod grade;
pub mod logger;
pub mod model;
pub mod output;
pub mod scoring;
pub mod session;
pub mod storage;
