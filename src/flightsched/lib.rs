//! # Flightsched Architecture
//!
//! Flightsched turns flight-schedule CSV files into a validated JSON database,
//! logs every line it could not accept, and answers filter queries against the
//! result. It is a library with a thin CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, prints messages, picks the exit code   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Checks the invocation, resolves artifact paths           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - ingest, load, query; each returns a CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (batch, parser, validate, query) + Storage (store/)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data flow
//!
//! ```text
//! source files ─▶ Batch ─▶ parser (uses validate) ─▶ records + error entries
//!                                                    │
//!                       db.json ◀── store ◀──────────┤
//!                    errors.txt ◀── store ◀──────────┘
//! db.json + queries ─▶ query::evaluate ─▶ response_<timestamp>.json
//! ```
//!
//! Per-line problems are collected as [`model::ErrorEntry`] values and never
//! stop a batch. Anything else (missing inputs, unreadable or malformed JSON,
//! bad invocations) is a [`error::FlightError`] and ends the run.
//!
//! ## Module Overview
//!
//! - [`api`]: facade and run planning
//! - [`commands`]: ingest, load and query operations
//! - [`batch`]: multi-source ingestion with a shared line counter
//! - [`parser`]: line classification for one source
//! - [`validate`]: per-record rule checks
//! - [`query`]: filter matching
//! - [`store`]: artifact storage and stable rendering
//! - [`model`]: records, error entries, queries
//! - [`config`]: `flightsched.json` settings
//! - [`error`]: error types

pub mod api;
pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod query;
pub mod store;
pub mod validate;
