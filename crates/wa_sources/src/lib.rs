pub mod wikipedia;

pub use wikipedia::WikipediaSource;

pub mod prelude {
    pub use super::wikipedia::WikipediaSource;
    pub use wa_core::{ContentSource, Error, Result, SourceText};
}
