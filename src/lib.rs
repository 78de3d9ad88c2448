//! Dice expressions for a tabletop character sheet.
//!
//! An [`Expression`] describes a roll such as `d20 + 4 + 3`. It can be
//! [summarized](summarize) into a formula without rolling anything, or
//! [evaluated](evaluate) into a [`RollResult`] tree that mirrors it and records
//! every die thrown.
//!
//! ```
//! use sheet_dice::{expr::*, roll::Eval, summarize, evaluate};
//!
//! let attack = sum([
//!     d20(),
//!     constant(4).named("Strength Modifier"),
//!     constant(3).named("Proficiency Bonus"),
//! ]);
//! assert_eq!(summarize(&attack), "d20 + 7");
//! assert!((8..=27).contains(&evaluate(&attack).value()));
//! ```

pub mod character;
pub mod common;
pub mod config;
pub mod error;
pub mod expr;
pub mod feed;
pub mod roll;
pub mod session;

pub use common::{Int, Named};
pub use error::{Result, SheetError};
pub use expr::{summarize, Expression};
pub use roll::{evaluate, evaluate_with, RollResult};
