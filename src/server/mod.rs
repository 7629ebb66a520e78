//! Staffboard backend, compiled with the `server` feature.
//!
//! Requests enter through [`router`], pass the session and [`middleware::auth`] guards,
//! and reach a `controller`. Controllers turn DTOs into params and call a `service`,
//! which applies the staff rules (rank ladder, LOA, appeals, wallet) on top of the
//! `data` repositories. Domain types and params live in `model`, errors in `error`.
//!
//! Next to the HTTP side, [`bot`] keeps the `staff_member` table in step with the
//! guild and turns appeal buttons into appeals, while [`scheduler`] ends elapsed
//! leaves. Both share the database and the serenity HTTP client with the API through
//! [`state::AppState`].

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
