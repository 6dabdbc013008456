pub mod news;
pub mod publications;
pub mod research;
pub mod team;

pub use news::NewsSource;
pub use publications::PublicationsSource;
pub use research::ResearchSource;
pub use team::TeamSource;
