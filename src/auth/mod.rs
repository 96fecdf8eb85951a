//! Authentication: JWT issuance and registration checks.

mod jwt;
mod service;

pub use jwt::{Claims, JwtIssuer};
pub use service::AuthAppService;
