use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub enum TokenRequest<'a> {
    ClientCredentials {
        client_id: &'a str,
        client_secret: &'a str,
        audience: &'a str,
    },
    AuthorizationCode {
        client_id: &'a str,
        client_secret: &'a str,
        code: &'a str,
        redirect_uri: &'a str,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn client_credentials_json_serialize_grant_type() {
        let request = TokenRequest::ClientCredentials {
            client_id: "id",
            client_secret: "secret",
            audience: "api",
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["grant_type"], "client_credentials");
        assert_eq!(json["client_id"], "id");
        assert_eq!(json["audience"], "api");
    }

    #[test]
    fn authorization_code_json_serialize_grant_type() {
        let request = TokenRequest::AuthorizationCode {
            client_id: "id",
            client_secret: "secret",
            code: "abc",
            redirect_uri: "https://tickets.example.com/callback",
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["grant_type"], "authorization_code");
        assert_eq!(json["code"], "abc");
    }
}
