pub mod query;
pub mod scan;
pub mod show;
