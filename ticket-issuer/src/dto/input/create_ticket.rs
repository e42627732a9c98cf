use serde::Deserialize;

///
/// Fields are optional so that missing ones are reported
/// as validation error instead of deserialization rejection
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicket {
    pub vatin: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
