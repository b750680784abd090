// RapidVideo API client module
//
// - client:   RapidVideo, the HTTP client (info, upload, remote upload)
// - endpoint: query-string endpoint builders
// - proxy:    SOCKS5/HTTP proxy URL parsing
// - auth:     API key / user id
// - types:    response envelope and payload types

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod proxy;
pub mod types;
