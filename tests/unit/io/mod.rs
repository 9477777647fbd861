mod configuration;
mod error;
