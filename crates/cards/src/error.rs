// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing errors.
use thiserror::Error;

/// Errors returned when parsing a card name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// A card name must have a rank and a suit character.
    #[error("invalid card `{0}`, expected a rank and a suit character")]
    Length(String),
    /// Unknown rank character.
    #[error("invalid rank `{0}`")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit `{0}`")]
    Suit(char),
    /// A concrete card was expected.
    #[error("card `{0}` is a wildcard")]
    Wildcard(String),
}
