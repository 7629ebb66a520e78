//! Cron jobs running alongside the server.

pub mod loa_expiry;
