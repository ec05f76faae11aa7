//! Core data types used throughout the library.

pub mod tokens;

pub use tokens::{
    Category, CategoryRecord, ColorScale, ComponentRecord, LayoutData, Mode, StateData, StateKey,
    StateMap, TextStyle, TextToken, TokenSet,
};
