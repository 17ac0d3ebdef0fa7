//! Core library modules for twlog.
//!
//! ## Features
//!
//! - **Input**: Configuration, data storage, row sources and validation
//! - **Aggregation**: Durations, descriptions and the per-day merge engine
//! - **Submission**: Task inference and outbound record building
//! - **Output**: Messages and console tables

pub mod aggregator;
pub mod config;
pub mod data_storage;
pub mod description;
pub mod duration;
pub mod error;
pub mod inference;
pub mod messages;
pub mod row;
pub mod source;
pub mod submission;
pub mod view;
