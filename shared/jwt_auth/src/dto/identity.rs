use super::Claims;
use std::{ops::Deref, sync::Arc};

///
/// Verified caller identity.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerIdentity behind an Arc.
///
/// InnerIdentity fields are accessible thanks to Deref trait.
///
#[derive(Clone, Debug)]
pub struct Identity {
    inner: Arc<InnerIdentity>,
}

///
/// Identity information retrieved from a verified token.
///
#[derive(Debug)]
pub struct InnerIdentity {
    pub subject: String,
    pub name: Option<String>,
}

impl Identity {
    pub fn new(subject: String, name: Option<String>) -> Self {
        Self {
            inner: Arc::new(InnerIdentity { subject, name }),
        }
    }

    ///
    /// Name that should be shown to the user.
    /// Falls back to the subject when the provider did not send a name.
    ///
    pub fn display_name(&self) -> &str {
        self.inner.name.as_deref().unwrap_or(&self.inner.subject)
    }
}

impl Deref for Identity {
    type Target = InnerIdentity;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self::new(claims.sub, claims.name)
    }
}
