//! Error reports for record processing.
//!
//! - [`build`] turns a batch of violations into per-row [`ErrorOutput`]s
//! - [`ErrorReport`] pairs a JSON body with its status: 422 for batch
//!   failures, 400 for any other domain error

mod api;
mod output;

pub use api::{
    BAD_REQUEST, ErrorBody, ErrorDetail, ErrorPayload, ErrorReport, UNPROCESSABLE_ENTITY,
};
pub use output::{ErrorOutput, ViolationInfo, build};
