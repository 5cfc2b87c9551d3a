//! Server-rendered UI built on maud.
//!
//! Anything composable into a page implements [`maud::Render`]; the root
//! layout accepts any such value as its children.
//!
//! # Structure
//!
//! - [`layout`]: document shell and site metadata
//! - [`pages`]: route pages
//! - [`components`]: reusable components

pub mod components;
pub mod layout;
pub mod pages;

pub use layout::{METADATA, Metadata, RootLayout};
pub use pages::{LandingPage, NotFoundPage};
