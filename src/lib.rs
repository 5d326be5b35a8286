//! Workforce ROI - Wellness program cost-avoidance model
//!
//! This crate estimates what a workforce wellness program saves a
//! law-enforcement organization through prevented separations, prevented
//! workers' compensation claims and prevented discipline cases, and compares
//! that against the cost of the seats purchased.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
