//! Collaborators the linker talks to.
//!
//! Each host concern sits behind a small trait so the linking pipeline can be
//! tested without an editor, a UI or the network.

pub mod editor;
pub mod notice;
pub mod scripture;

pub use editor::{Editor, Position, TextBuffer};
pub use notice::{LogNotifier, Notifier};
pub use scripture::{BibleApiClient, VerseFetcher};
