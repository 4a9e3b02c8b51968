pub mod audit;
pub mod auth;
pub mod context;
pub mod credential;
pub mod directory;
pub mod entries;
pub mod espelho;
pub mod hash;
pub mod import;
pub mod observe;
pub mod point;
pub mod receipt;
pub mod register;
pub mod report;
