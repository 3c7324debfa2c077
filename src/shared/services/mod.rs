// Shared services: the API client and the seams it is built from
pub mod api_service;
pub mod redirect;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use api_service::ApiClient;
pub use redirect::AuthRedirect;
pub use session::{MemorySessionStore, SessionStore};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
