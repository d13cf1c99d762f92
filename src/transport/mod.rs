pub mod client;
pub mod codec;
pub mod error;

pub use client::Client;
pub use error::ClientError;
pub use reqwest::Method;
