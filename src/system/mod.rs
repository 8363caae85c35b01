//! # System Interaction Layer
//!
//! Everything that touches the operating system lives here, behind small
//! seams the launch sequence can be tested against.
//!
//! ## Modules
//!
//! - **`executor`**: process invocations as data, the `CommandRunner` trait used for
//!   captured runs, and the final hand-off that replaces the launcher process.
//! - **`git`**: the two git calls the launcher needs (submodule refresh and repository root).
//! - **`lookup`**: resolving program names on the search path.

pub mod executor;
pub mod git;
pub mod lookup;
