//! Building blocks shared by every crate in the workspace:
//! - `network`: the `Header<T>` response envelope and its `Pagination` metadata
//! - `pagination`: caller-side paging input
//! - `utils::logging`: tracing subscriber setup

pub mod network;
pub mod pagination;
pub mod types;
pub mod utils;
