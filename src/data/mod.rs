//! Static Data Tables
//!
//! Catalog taxonomy shipped with the client so product forms work without an
//! extra fetch.

pub mod attributes;
