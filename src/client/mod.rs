pub mod hiscores;
pub mod http;

pub use hiscores::HiscoresClient;
pub use http::{HttpService, ReqwestHttpService};
