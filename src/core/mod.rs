//! Client facade and its configuration.

pub mod form3;
