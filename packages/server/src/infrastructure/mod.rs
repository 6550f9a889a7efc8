//! Infrastructure layer: DTOs, repository implementations and seeding.

pub mod dto;
pub mod repository;
pub mod seed;
