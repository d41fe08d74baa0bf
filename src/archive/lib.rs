pub mod config;
pub mod credentials;
pub mod error;
pub mod generator;
pub mod judge;
pub mod language;
pub mod layout;
pub mod site;
pub mod template;
pub mod types;
