//! Transfer gateway: the boundary with the external transfer service

pub mod http;
mod traits;

pub use http::HttpTransferGateway;
pub use traits::{TransferGateway, TransferRequest, TransferResponse};
