//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (percentages, errors)
//! - `organization` - Headcount reference data for departments, bureaus and divisions
//! - `roi` - Pure ROI computation engine (assumptions, investment, derived metrics)
//! - `faq` - Canned question/answer lookup for the help chat
//! - `formatting` - Currency, percentage and ROI display strings

pub mod faq;
pub mod formatting;
pub mod foundation;
pub mod organization;
pub mod roi;
