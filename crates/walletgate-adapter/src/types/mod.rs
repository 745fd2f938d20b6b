/*
[INPUT]:  Wire schema definitions and UI state requirements
[OUTPUT]: Typed request/response structs and notice types
[POS]:    Data layer - type definitions
[UPDATE]: When wire schema changes or new types added
*/

pub mod notice;
pub mod requests;
pub mod responses;

pub use notice::{Notice, Tone};
pub use requests::{TestKeyRequest, VerifyRequest};
pub use responses::{ApiFailure, NonceResponse, TestKeyResponse, VerifyResponse};
