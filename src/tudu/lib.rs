//! # Tudu Architecture
//!
//! Tudu is a **UI-agnostic todo-list library**. The CLI binary is one client
//! of it, and the only place that knows about stdout/stderr and exit codes.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, selects the backend, renders output    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, position resolution, mutation                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TodoStore trait                                 │
//! │  - JsonStore / SqliteStore (production), MemoryStore (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions Are a View
//!
//! Users address todos by the 1-based position shown in `list`. Positions are
//! never stored: every operation re-enumerates the collection and resolves
//! position → record against that fresh ordering, so deleting item 2
//! renumbers item 3 to position 2 on the next listing. The stored identity is
//! a UUID, assigned at creation and never reused.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the business
//!    logic against `MemoryStore`. This is where the lion's share of testing
//!    lives.
//! 2. **Storage** (`tests/*_store_test.rs`): integration tests of the two
//!    real backends on temp directories.
//! 3. **CLI** (`tests/cli_e2e.rs`): end-to-end runs of the binary for both
//!    backends.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types ([`model::Todo`], [`model::TodoPatch`])
//! - [`config`]: Configuration (backend selection)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
