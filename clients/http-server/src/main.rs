use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use clap::Parser;
use roster::{
    controller::roster::RosterController,
    store::{memory::InMemoryPersonStore, options::StoreOptions},
};
use std::io;
use std::sync::Mutex;

mod routes;
mod tracers;

/// 📋 Roster HTTP Server, lists, shows and adds people on the rookie roster
#[derive(Parser, Debug)]
struct Cli {
    /// JSON file holding an array of people to start with. Note: Does not support shell paths, e.g. ~
    #[clap(short, long)]
    seed: Option<std::path::PathBuf>,

    /// Start with the built-in sample roster, ignored when --seed is given
    #[clap(long)]
    sample: bool,

    /// Port the http server will run on
    #[clap(short, long, default_value = "9000")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Log every http request
    #[clap(long)]
    log_http: bool,

    /// Print store spans and their timings
    #[clap(long)]
    trace_spans: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    tracers::init_tracing_subscriber(args.trace_spans);

    let store_options = StoreOptions::default().set_seed_from_flags(args.seed, args.sample);

    let store = InMemoryPersonStore::from_options(store_options)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let roster = Data::new(Mutex::new(RosterController::new(store)));

    log::info!("starting HTTP server on port {}.", args.port);

    log::info!("Roster: http://{}:{}/rookies", args.address, args.port);

    let log_http = args.log_http;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(roster.clone())
            .configure(routes::configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
