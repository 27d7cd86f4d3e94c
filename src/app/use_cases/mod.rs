//! Use-Cases der Application-Layer-Orchestrierung.

pub mod data_load;
pub mod directory;
pub mod focus;
pub mod view;
