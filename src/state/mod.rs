pub mod touch;

pub use touch::GestureState;
