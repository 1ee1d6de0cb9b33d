//! Card hand logic for card-game interfaces, with optional `no_std` support.
//!
//! The crate provides the card data model ([`CardDefinition`]), a [`Hand`]
//! that draws from a shared pool and tracks a single selection, the text
//! shown when a card is executed, and a [`HandController`] that routes UI
//! events to all of them through injected view traits.
//!
//! There is no game simulation: executing a card only produces its
//! description.
//!
//! # Example
//!
//! ```
//! use cardhand::{Ability, CardDefinition, Hand, describe};
//!
//! let pool = vec![
//!     CardDefinition::new("Golem")
//!         .with_stats(10, 4)
//!         .with_ability(Ability::Heal { amount: 3.0 })
//!         .shared(),
//! ];
//!
//! let mut hand = Hand::new(42);
//! hand.draw(5, &pool).unwrap();
//! hand.select(2).unwrap();
//!
//! let card = hand.selected_card().unwrap();
//! assert!(describe::execution_description(card).ends_with("Heal ally units by 3."));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod describe;
pub mod error;
pub mod hand;
pub mod icon;
pub mod options;
pub mod present;
pub mod tween;

// Re-export main types
pub use card::{Ability, AbilityType, CardDefinition, Evolution, Origin, Rarity};
pub use error::{DrawError, PresentError, SelectError};
pub use hand::{Hand, Selection};
pub use options::HandOptions;
pub use present::{CardDetails, CardFace, DetailView, HandController, HandView, TextSink};
pub use tween::{PopAnimator, Tween};
