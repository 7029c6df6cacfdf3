pub mod kv;
pub mod types;
