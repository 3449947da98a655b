//! Route handlers for the portfolio API.

mod chat;
mod emotion;

pub(crate) use chat::chat;
pub(crate) use emotion::emotion;
