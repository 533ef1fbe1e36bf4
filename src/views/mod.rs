pub mod feedback;
pub mod generate;
pub mod homepage;
pub mod layout;
pub mod quiz;

pub use layout::page;
