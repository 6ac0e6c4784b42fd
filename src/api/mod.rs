pub mod quote_api;
