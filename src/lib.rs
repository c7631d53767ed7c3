//! # Tribune
//!
//! A terminal reader for the Girondins4Ever news and article feeds.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → Screen state → UI
//! ```
//!
//! - [`fetcher`]: HTTP client behind a stubbing-friendly trait
//! - [`normalizer`]: converts RSS documents to [`FeedItem`](domain::FeedItem)s
//! - [`tui`]: two-tab terminal interface built with ratatui
//!
//! ## Quick start
//!
//! ```bash
//! # Launch the TUI (News and Articles tabs)
//! tribune
//!
//! # Print the articles feed to stdout
//! tribune list articles
//! ```
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`cli`]: command-line interface definitions
//! - [`config`]: color and TUI settings from `~/.config/tribune/config.toml`
//! - [`domain`]: core domain models (FeedSource, FeedItem)
//! - [`fetcher`]: HTTP fetching
//! - [`normalizer`]: feed parsing and normalization
//! - [`tui`]: terminal user interface

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components
/// once, before the first frame: configuration, HTTP client, normalizer.
pub mod app;

/// Command-line interface using clap.
///
/// Running `tribune` with no subcommand launches the TUI;
/// `tribune list [news|articles]` prints a feed's titles and exits.
pub mod cli;

/// Configuration management for the TUI.
///
/// Loads from `~/.config/tribune/config.toml`, supporting custom colors
/// (named or hex) and the event tick rate.
pub mod config;

/// Core domain models.
///
/// - [`FeedSource`](domain::FeedSource): the two fixed feeds and their URLs
/// - [`FeedItem`](domain::FeedItem): one entry of a fetched feed
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for document retrieval
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed parsing and normalization.
///
/// Converts RSS documents into [`FeedItem`](domain::FeedItem) structs,
/// passing item identifiers through untouched.
pub mod normalizer;

/// Terminal user interface.
///
/// Two tabs (News, Articles), each a list of item titles with a header.
/// Keybindings: j/k navigate, Tab switches feed, r refreshes, q quits.
pub mod tui;
