//! Runtime configuration (vault location and KDF cost).

pub mod settings;

pub use settings::Settings;
