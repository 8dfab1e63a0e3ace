mod system;

pub use system::{healthz, root};
