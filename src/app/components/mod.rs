pub mod button;
pub mod card;
pub mod common;

pub use button::{Button, ButtonVariant, SubmitButton};
pub use card::Card;
pub use common::{Alert, AlertKind, LoadingSpinner, TextField};
