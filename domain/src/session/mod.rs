//! Message and request types exchanged with a model.

pub mod entities;
pub mod request;
