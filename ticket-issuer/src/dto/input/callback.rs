use serde::Deserialize;

///
/// Query of the identity provider redirect after login
///
#[derive(Debug, Deserialize)]
pub struct Callback {
    pub code: String,
    pub state: String,
}
