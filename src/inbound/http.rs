use crate::configuration::ApplicationSettings;
use crate::domain::contact::ports::ContactService;
use crate::inbound::http::handlers::{contact, contact_seller, health_check};
use crate::inbound::http::responses::ApiResponse;
use crate::inbound::http::state::SharedContactState;
use actix_web::dev::Server;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

mod errors;
mod handlers;
mod responses;
pub mod state;

pub struct Application<CS>
where
    CS: ContactService,
{
    port: u16,
    server: Server,
    contact_state: SharedContactState<CS>,
}

fn run<CS: ContactService>(
    listener: TcpListener,
    contact_state: SharedContactState<CS>,
) -> Result<Server, std::io::Error> {
    let contact_state = web::Data::new(contact_state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(contact_state.clone())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::post().to(contact::<CS>))
            .route("/contact-seller", web::post().to(contact_seller::<CS>))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Rewrites body deserialization failures (missing or mistyped fields,
/// malformed JSON) into the uniform `{success, message}` error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiResponse::failure("All fields are required.")),
        )
        .into()
    })
}

impl<CS> Application<CS>
where
    CS: ContactService,
{
    pub async fn build(
        contact_service: CS,
        configuration: ApplicationSettings,
    ) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", configuration.host, configuration.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let contact_state = SharedContactState::new(contact_service);

        let server: Server = run(listener, contact_state.clone())?;

        Ok(Self {
            port,
            server,
            contact_state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn contact_state(&self) -> SharedContactState<CS> {
        self.contact_state.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
