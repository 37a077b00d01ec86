pub mod block;
pub mod content;
pub mod text;
pub mod vocab;

pub use block::*;
pub use content::*;
pub use text::*;
pub use vocab::*;
