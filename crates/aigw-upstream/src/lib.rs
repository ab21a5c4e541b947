#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;

pub use client::{ClientBuildError, ReqwestUpstreamClient};
pub use config::{DEFAULT_UPSTREAM_TIMEOUT, UpstreamClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use aigw_db as _;
#[cfg(test)]
use mockito as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
