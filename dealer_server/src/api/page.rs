//! Browser page: a form for the player count and the dealt hands.
//!
//! `GET /` renders the empty form. `POST /distribute` takes the form field
//! `numberOfPeople` and renders one panel per person, each card labelled
//! with its display name and coloured by suit.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use card_dealer::{Deal, DealError, PlayerCount};
use serde::Deserialize;
use std::fmt::Write;

use super::{AppState, cards::run_distribution, request_id::RequestId};

#[derive(Debug, Default, Deserialize)]
pub struct DistributeForm {
    #[serde(rename = "numberOfPeople", default)]
    pub number_of_people: Option<String>,
}

impl DistributeForm {
    /// A missing field is `DealError::InvalidInput`, like any bad value.
    pub fn player_count(&self) -> Result<PlayerCount, DealError> {
        match self.number_of_people.as_deref() {
            Some(raw) => PlayerCount::parse(raw),
            None => Err(DealError::InvalidInput("missing numberOfPeople".to_string())),
        }
    }
}

/// Render the empty form.
pub async fn index() -> Html<String> {
    Html(render_page(None, None))
}

/// Handle the form submission and render the result.
pub async fn distribute_form(
    State(state): State<AppState>,
    request_id: RequestId,
    form: Result<Form<DistributeForm>, FormRejection>,
) -> Response {
    let players = match form {
        Ok(Form(form)) => form.player_count(),
        Err(rejection) => Err(DealError::InvalidInput(rejection.body_text())),
    };

    match run_distribution(&state, &request_id, players) {
        Ok(deal) => Html(render_page(Some(&deal), None)).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Html(render_page(None, Some(&e)))).into_response()
        }
    }
}

/// Build the full HTML document.
///
/// Only validated numbers, card labels and fixed messages are interpolated,
/// so no escaping is needed.
pub fn render_page(deal: Option<&Deal>, error: Option<&DealError>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Card Distributor</title>\n</head>\n<body>\n\
         <form method=\"post\" action=\"/distribute\">\n\
         <label for=\"numPeople\">Number of People:</label>\n\
         <input type=\"number\" id=\"numPeople\" name=\"numberOfPeople\" min=\"1\" placeholder=\"e.g., 4\">\n\
         <button type=\"submit\">Distribute Cards</button>\n\
         <p>Total cards available: 52.</p>\n\
         </form>\n",
    );

    if let Some(err) = error {
        let _ = write!(
            html,
            "<div class=\"error\">\n<p><strong>Irregularity occurred</strong></p>\n<p>{}</p>\n</div>\n",
            err.client_message()
        );
    }

    if let Some(deal) = deal {
        render_hands(&mut html, deal);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_hands(html: &mut String, deal: &Deal) {
    let _ = writeln!(
        html,
        "<h3>Cards Distributed to {} People:</h3>",
        deal.number_of_people
    );

    for (index, hand) in deal.hands.iter().enumerate() {
        let _ = writeln!(
            html,
            "<section class=\"person\">\n<h4>Person {} ({} cards)</h4>",
            index + 1,
            hand.len()
        );

        if hand.is_empty() {
            html.push_str("<p><em>No cards distributed.</em></p>\n");
        } else {
            html.push_str("<div class=\"cards\">\n");
            for card in hand {
                let _ = writeln!(
                    html,
                    "<span class=\"card\" style=\"color: {}\">{}</span>",
                    card.suit.color(),
                    card.display_value()
                );
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }
}
