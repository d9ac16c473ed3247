//! Chat bookkeeping: storage, the single-owner service, and a shareable handle.

pub mod service;
pub mod shared;
pub mod store;
