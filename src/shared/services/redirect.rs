/// Where the client sends the user once the backend rejects the session
pub trait AuthRedirect {
    fn to_login(&self);
}
