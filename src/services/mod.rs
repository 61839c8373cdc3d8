// Service module exports

pub mod airing;
pub mod broadcast_day;
pub mod filter;
pub mod grouping;
pub mod layout;
pub mod normalizer;
pub mod parser;
pub mod settings;
