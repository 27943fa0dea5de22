//! Server Module
//!
//! This module contains the server-side setup: configuration loading, the
//! shared application state and its initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and database pool
//! └── init.rs         - State construction
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env`
//! 2. **State Creation**: `build_state` opens the store and picks the mailer
//! 3. **Router Creation**: `routes::create_router(state)`

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError};
pub use init::build_state;
pub use state::AppState;
