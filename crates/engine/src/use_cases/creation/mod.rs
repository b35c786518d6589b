//! Character creation use cases.

mod error;
mod initialize_character;

use std::sync::Arc;

pub use error::CreationError;
pub use initialize_character::InitializeCharacter;

/// Container for character creation use cases.
pub struct CreationUseCases {
    pub initialize: Arc<InitializeCharacter>,
}

impl CreationUseCases {
    pub fn new(initialize: Arc<InitializeCharacter>) -> Self {
        Self { initialize }
    }
}
