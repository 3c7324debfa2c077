pub mod ai_playground;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;

pub use ai_playground::AiPlayground;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use register::Register;
