use std::{io::Error, net::TcpListener, sync::Arc};

use actix_web::{
    dev::Server,
    middleware::{Compress, Condition},
    web::{self, Data},
    HttpServer,
};
use fleetwatch_core::{Environment, FleetState};
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{routes, settings::Config, ApiDoc};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub fn build(settings: &Config, environment: Environment, state: Arc<FleetState>) -> App {
        let listener = TcpListener::bind(settings.listener_address()).unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = create_server(state, listener, settings, environment).unwrap();

        App { server, port }
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn create_server(
    state: Arc<FleetState>,
    listener: TcpListener,
    settings: &Config,
    environment: Environment,
) -> Result<Server, Error> {
    let not_prod = environment != Environment::Production;

    let state = Data::from(state);

    let mut server = HttpServer::new(move || {
        let app = actix_web::App::new()
            .app_data(state.clone())
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, actix_cors::Cors::permissive()))
            .wrap(TracingLogger::default())
            .route("/fleet", web::get().to(routes::v1::fleet::fleet));

        match environment {
            Environment::Production | Environment::Test => app,
            _ => app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            ),
        }
    })
    .listen(listener)?;

    if let Some(workers) = settings.num_workers {
        server = server.workers(workers as usize);
    }

    Ok(server.run())
}
