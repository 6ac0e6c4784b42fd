pub mod journal_body;
