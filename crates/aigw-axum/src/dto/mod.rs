//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the JSON shapes (camelCase) and decouple the domain
//! types from their external representation.

pub mod answer;
pub mod platform;

pub use answer::{GenerateAnswerRequest, GenerateByNameRequest};
pub use platform::{
    ListPlatformsQuery, ListPlatformsResponse, PlatformDto, PlatformInputDto,
    UpdatePlatformRequest,
};
