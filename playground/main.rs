/// ferrite-playground
///
/// Click points of up to three classes onto the plane and watch the network
/// learn to separate them. Served by a synchronous tiny_http server; the page
/// polls `/frame` once per animation frame, which runs one training slice,
/// then reloads the classification grid.
///
/// Run with:
///   cargo run --bin playground --release [config.json]
/// Then open http://127.0.0.1:7878

mod grid;
mod render;
mod routes;
mod state;

use log::{error, info};
use tiny_http::Server;

use ferrite_playground::PlaygroundConfig;

use state::PlaygroundState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match PlaygroundConfig::load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("could not load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => PlaygroundConfig::default(),
    };

    let mut state = match PlaygroundState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let addr = state.config.addr.clone();
    let server = Server::http(&addr).expect("Failed to bind HTTP server");

    info!("ferrite-playground listening on http://{addr}");
    info!(
        "network: {} inputs, {} layers, {} classes, learning rate {}",
        state.network.input_size(),
        state.network.layers().len(),
        state.samples.classes(),
        state.network.learning_rate(),
    );

    // One request at a time on this thread: the network is not `Send`, and
    // training must never interleave with rendering.
    for request in server.incoming_requests() {
        routes::dispatch(request, &mut state);
    }
}
