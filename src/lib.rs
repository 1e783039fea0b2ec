//! PED Assess - Pre-Existing Disease Assessment Service
//!
//! This crate implements branching health questionnaire traversal for
//! insurance underwriting, resolving respondent answer trails to ICD-10
//! coded outcomes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
