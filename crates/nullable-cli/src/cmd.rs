pub mod inspect;
pub mod sample;
