//! HTTP API
//!
//! One module per resource, each exposing `router()`:
//!
//! | Module | Prefix |
//! |--------|--------|
//! | [`health`] | /health |
//! | [`customers`] | /customers |
//! | [`tables`] | /tables |
//! | [`orders`] | /orders |
//! | [`front_workers`] | /frontworkers |
//! | [`back_workers`] | /backworkers |
//! | [`foods`] | /foods |
//!
//! Form-encoded POST bodies, JSON responses; errors use the
//! `{"code", "message", "details"}` envelope.

pub mod back_workers;
pub mod customers;
pub mod foods;
pub mod front_workers;
pub mod health;
pub mod orders;
pub mod tables;
