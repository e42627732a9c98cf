use super::Error;
use crate::dto::output;
use tera::{Context, Tera};

const INDEX: &str = "index.html";
const TICKET: &str = "ticket.html";

///
/// Templates are compiled into the binary and parsed once at startup.
/// Every value is HTML-escaped because template names end with `.html`.
///
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates([
            (INDEX, include_str!("../../templates/index.html")),
            (TICKET, include_str!("../../templates/ticket.html")),
        ])?;

        Ok(Self { tera })
    }

    pub fn render_index(&self, ticket_count: i64) -> Result<String, Error> {
        let mut context = Context::new();
        context.insert("ticket_count", &ticket_count);

        Ok(self.tera.render(INDEX, &context)?)
    }

    pub fn render_ticket(&self, ticket: &output::Ticket, user_name: &str) -> Result<String, Error> {
        let mut context = Context::new();
        context.insert("ticket", ticket);
        context.insert("user_name", user_name);

        Ok(self.tera.render(TICKET, &context)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    fn ticket(first_name: &str) -> output::Ticket {
        output::Ticket {
            ticket_id: Uuid::new_v4(),
            vatin: "12345678901".to_string(),
            first_name: first_name.to_string(),
            last_name: "Anić".to_string(),
            created_at: "2024-10-20T14:30:00Z".to_string(),
        }
    }

    #[test]
    fn render_index_contains_count() {
        let views = Views::new().unwrap();

        let html = views.render_index(17).unwrap();

        assert!(html.contains(r#"<span id="ticketCount">17</span>"#));
        assert!(html.contains(r#"<form id="ticketForm">"#));
    }

    #[test]
    fn render_ticket_contains_fields() {
        let views = Views::new().unwrap();
        let ticket = ticket("Ana");

        let html = views.render_ticket(&ticket, "Marko Marić").unwrap();

        assert!(html.contains("Prijavljeni korisnik:</strong> Marko Marić"));
        assert!(html.contains(&ticket.ticket_id.to_string()));
        assert!(html.contains("12345678901"));
        assert!(html.contains("Ana Anić"));
        assert!(html.contains("2024-10-20T14:30:00Z"));
    }

    #[test]
    fn render_ticket_escapes_values() {
        let views = Views::new().unwrap();
        let ticket = ticket("<script>alert(1)</script>");

        let html = views.render_ticket(&ticket, "<b>user</b>").unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>user</b>"));
    }
}
