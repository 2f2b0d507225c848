//! Background task wrappers around the service clients.
//!
//! Each function turns a piece of asynchronous work into an Iced `Task`
//! producing a [`crate::message::Message`] on completion.

mod catalogue;

pub use catalogue::{load_directory, perform};
