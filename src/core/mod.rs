//! Core library components.
//!
//! This module contains the reusable logic for the encrypted history: the
//! cipher codec, machine key derivation, persistence, and the item store.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod history;
pub mod keys;
pub mod monitor;
pub mod paths;
pub mod store;
pub mod types;
