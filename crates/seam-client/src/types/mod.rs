//! Request and response types for the Seam client

mod common;
mod models;
mod requests;
mod responses;

pub use common::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
