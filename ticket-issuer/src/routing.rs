use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{session_cookie, LoginState, SessionUser, LOGIN_STATE_COOKIE, SESSION_COOKIE},
    dto::{input, output},
    error::Error,
    service::{
        identity_provider_service::IdentityProviderService, session_service::SessionService,
        tickets_service::TicketsService,
    },
    view::Views,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::{cookie::Cookie, CookieJar, WithRejection};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/create-ticket", post(create_ticket))
        .route_layer(application_middleware.auth.clone())
        .route("/", get(index))
        .route("/ticket/:ticket_id", get(get_ticket))
        .route("/api/ticket-count", get(get_ticket_count))
        .route("/get-token", get(get_token))
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/logout", get(logout))
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    WithRejection(Json(ticket), _): WithRejection<Json<input::CreateTicket>, Error>,
) -> Result<(StatusCode, Json<output::TicketCreated>), Error> {
    let ticket_created = tickets_service.create_ticket(ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket_created)))
}

async fn index(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(views): State<Arc<Views>>,
) -> Result<Html<String>, Error> {
    let ticket_count = tickets_service.count_tickets().await?;

    Ok(Html(views.render_index(ticket_count)?))
}

async fn get_ticket(
    SessionUser(identity): SessionUser,
    Path(ticket_id): Path<String>,
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(views): State<Arc<Views>>,
) -> Result<Html<String>, Error> {
    let ticket = tickets_service.find_ticket(&ticket_id).await?;

    Ok(Html(views.render_ticket(&ticket, identity.display_name())?))
}

async fn get_ticket_count(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Json<output::TicketCount>, Error> {
    let ticket_count = tickets_service.count_tickets().await?;

    Ok(Json(output::TicketCount { ticket_count }))
}

async fn get_token(
    State(identity_provider_service): State<Arc<dyn IdentityProviderService>>,
) -> Result<Json<output::AccessToken>, Error> {
    let token = identity_provider_service.fetch_access_token().await?;

    Ok(Json(output::AccessToken { token }))
}

async fn login(
    Query(login): Query<input::Login>,
    State(identity_provider_service): State<Arc<dyn IdentityProviderService>>,
    State(session_service): State<Arc<dyn SessionService>>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), Error> {
    let login_state = LoginState::new(login.return_to.as_deref());
    let authorization_url = identity_provider_service.authorization_url(&login_state.state)?;
    let cookie = login_state.to_cookie(session_service.secure_cookie())?;

    Ok((jar.add(cookie), Redirect::to(&authorization_url)))
}

async fn callback(
    Query(callback): Query<input::Callback>,
    State(identity_provider_service): State<Arc<dyn IdentityProviderService>>,
    State(session_service): State<Arc<dyn SessionService>>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), Error> {
    let login_state = jar
        .get(LOGIN_STATE_COOKIE)
        .and_then(LoginState::from_cookie)
        .ok_or(Error::InvalidLoginState)?;
    if login_state.state != callback.state {
        return Err(Error::InvalidLoginState);
    }

    let identity = identity_provider_service
        .exchange_authorization_code(&callback.code)
        .await?;
    let token = session_service.create_session(&identity)?;
    let cookie = session_cookie(
        token,
        session_service.secure_cookie(),
        session_service.lifespan_secs(),
    );

    let jar = jar
        .remove(Cookie::build(LOGIN_STATE_COOKIE).path("/"))
        .add(cookie);

    Ok((jar, Redirect::to(&login_state.return_to)))
}

async fn logout(
    State(identity_provider_service): State<Arc<dyn IdentityProviderService>>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), Error> {
    let logout_url = identity_provider_service.logout_url()?;

    Ok((
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        Redirect::to(&logout_url),
    ))
}
