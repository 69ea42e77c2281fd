//! Bootstrap for an Azure OpenAI connection: resolve credentials from the
//! process environment and hand out a ready-to-use client.
//!
//! Initialization is an explicit step in the composition root rather than a
//! load-time side effect: load the `.env` file, resolve the required
//! variables, construct the client. The resulting [`Connection`] is
//! read-only afterwards and safe to share.
//!
//! ```no_run
//! use aoai_conn::Connection;
//!
//! fn main() -> Result<(), aoai_conn::ConfigError> {
//!     aoai_conn::load_dotenv();
//!     let conn = Connection::from_env()?;
//!     println!("targeting deployment {}", conn.deployment());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connection;
pub mod error;

pub use config::{ClientConfig, load_dotenv};
pub use connection::Connection;
pub use error::ConfigError;
