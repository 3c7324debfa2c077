pub mod delay;

pub use delay::sleep_ms;
