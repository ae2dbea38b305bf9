//! Sample data providers
//!
//! This module defines the provider abstraction for the fixed demo data
//! set. The trait-based design lets tests substitute alternative fixtures
//! for the compiled-in one.

mod demo;
mod provider;

pub use demo::DemoMailData;
pub use provider::MailDataSource;
