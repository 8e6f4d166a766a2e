pub mod assignments;
pub mod delivery;
pub mod normalize;
pub mod text;
