//! Naia Core - Shared types and the cart state machine.
//!
//! This crate provides the pieces of the Naia storefront that carry no I/O:
//! - [`types`] - Newtype identifiers and GBP price formatting
//! - [`cart`] - Line items, cart commands/events, and derived totals
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no sessions, no HTTP,
//! no logging. Every cart mutation is a pure transition
//! `(CartState, CartCommand) -> (CartState, Option<CartEvent>)`; the storefront
//! crate decides what to do with the resulting event (persist, notify, publish).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{
    CartCommand, CartEvent, CartState, CartTotals, LineItem, ProductRef, VariantRef,
};
pub use types::*;
