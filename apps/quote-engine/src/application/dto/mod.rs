//! Data transfer objects for API boundaries.

mod quote_dto;

pub use quote_dto::QuoteRequestDto;
