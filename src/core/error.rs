//! Session-level error type.
//!
//! Each subsystem owns its own error enum; `GameError` is what session setup
//! returns, wrapping whichever of them failed.

use thiserror::Error;

use super::config::SettingsError;
use crate::cards::CatalogError;
use crate::render::RenderError;

/// Failure while starting a game session. All variants are fatal to the
/// session; none are retried.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_catalog_error_is_transparent() {
        let err: GameError = CatalogError::UnknownCardType(CardType::Licker).into();
        assert_eq!(err.to_string(), "unknown card type: Licker");
    }
}
