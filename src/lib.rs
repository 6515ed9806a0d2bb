//! Supabase Schema Check Library
//!
//! Introspects the `public` schema of a Supabase project through its PostgREST
//! API (`/rest/v1/information_schema.*`) and renders a console report.
//!
//! # Modules
//!
//! - `config`: Credentials loaded from the environment.
//! - `errors`: Error handling types.
//! - `inspector`: Sequential report runner.
//! - `logging`: Tracing subscriber setup shared by the binaries.
//! - `models`: `information_schema` record types.
//! - `supabase_client`: Authenticated REST client.

pub mod config;
pub mod errors;
pub mod inspector;
pub mod logging;
pub mod models;
pub mod supabase_client;
