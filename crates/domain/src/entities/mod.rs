//! Domain entities

mod critique;

pub use critique::PoemCritique;
