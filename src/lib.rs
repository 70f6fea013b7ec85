//! Propmock - mock-props synthesis and i18n-usage indexing for React components
//!
//! Propmock is a CLI tool and library that statically analyzes a tree of
//! React/TSX component sources. It finds every localization-key request
//! (`t("key")` calls and `<FormattedMessage id="...">` elements), detects each
//! file's component and its props interface, and synthesizes structurally
//! valid mock props for any declared interface so a component can be rendered
//! standalone without a real data source.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (scanning, resolution, synthesis, caching)

pub mod cli;
pub mod config;
pub mod core;
