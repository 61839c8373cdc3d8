// Module exports for models

pub mod layout;
pub mod normalized_event;
pub mod raw_event;
pub mod settings;
