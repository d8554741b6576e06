pub mod charts;
pub mod filter;
