pub mod controller;
pub mod env;
pub mod errors;
pub mod models;
pub mod storage;
pub mod util;
