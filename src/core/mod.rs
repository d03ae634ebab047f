//! Core library components.
//!
//! Request and store parsing, matching, decryption and the lookup that
//! ties them together. Nothing here touches stdin, stdout or the process
//! environment directly except [`config::Config::load`] and
//! [`logging::init`].

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod lookup;
pub mod matcher;
pub mod request;
pub mod store;
