pub mod journal;
pub mod quote;
