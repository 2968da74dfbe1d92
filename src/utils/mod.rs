pub mod http;

pub use http::{HttpClient, HttpReply, HttpTransport};
