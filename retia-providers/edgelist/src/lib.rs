//! Edge-list provider importing delimited `source,target` tables into a
//! [`retia_core::Graph`].
//!
//! Spreadsheet workbooks are read after export to CSV.

mod errors;
mod provider;

pub use crate::{
    errors::{EdgeListError, EdgeListErrorCode},
    provider::{EdgeListOptions, EdgeListProvider},
};
