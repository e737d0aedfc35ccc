//! Lifespan Estimator - Life expectancy from birth date and lifestyle.
//!
//! This crate implements a deterministic estimation pipeline (age, baseline
//! expectancy, health score, medical-advances bonus) behind a console
//! questionnaire and an HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
