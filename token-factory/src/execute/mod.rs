//! Execute handlers for the token factory contract.
//!
//! Handlers are organized by operation:
//! - `register` - RegisterNewToken and its instantiate reply
//! - `deposit` - proof-driven minting
//! - `withdraw` - burning for release on the remote chain
//! - `metadata` - proof-driven metadata sync
//! - `admin` - pause control, pauser roles, config and admin transfer
//!
//! Authorization is checked by `access::authorize` before any handler runs.

mod admin;
mod deposit;
mod metadata;
mod register;
mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use metadata::*;
pub use register::*;
pub use withdraw::*;
