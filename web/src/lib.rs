use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod source;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed for the first board instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = trivia_protocol::DEFAULT_API_BASE)]
    api: String,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}, api: {}", args.seed, args.api);

    let root = document()
        .get_element_by_id("trivia")
        .expect("Could not find id=\"trivia\" element");

    let props = game::GameProps {
        seed: args.seed,
        api: args.api.into(),
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
