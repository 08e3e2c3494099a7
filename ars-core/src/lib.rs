pub mod limits;
pub mod sample;
pub mod water_body;
