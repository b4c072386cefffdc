//! Adapters Layer
//!
//! | Port | Mock (Testing) | Production |
//! |------|----------------|------------|
//! | `RandomSource` | `FixedRandomSource` | `ThreadRandomSource` |

mod random;

pub use random::{FixedRandomSource, ThreadRandomSource};
