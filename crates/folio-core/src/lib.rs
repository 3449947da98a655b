//! folio-core: shared types, configuration, responder traits and the in-memory user store.
//!
//! The gateway and the skills crate both build on this crate so the chat and emotion
//! contracts live in one place.

mod error;
mod responder;
mod shared;
mod users;

pub use error::{ClassifierError, ResponderError, SetupError};
pub use responder::{ChatResponder, EmotionClassifier};
pub use shared::{CoreConfig, RequestContext, ResponderMode, DEFAULT_CONFIG_PATH};
pub use users::{NewUser, User, UserStore};
