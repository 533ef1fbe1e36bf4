pub mod feedback;
pub mod generate;
pub mod homepage;
pub mod quiz;
