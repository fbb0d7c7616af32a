mod config;
mod env_variable_utils;
mod logger;
mod models;
mod talks;
mod utils;

use crate::config::Config;
use crate::talks::components::{WatchLog, WatchLogProps};
use crate::talks::pipeline::mount_point;

fn main() {
    let config = Config::from_env();
    logger::init(config.debug);

    log::info!(
        "NAME: \"{}\", CATALOG: \"{}\", LOG: \"{}\", DEBUG: \"{}\"",
        config.app_name,
        config.detail_base_url,
        config.local_data_path,
        config.debug
    );

    let root = match mount_point(&config.list_root_id) {
        Ok(root) => root,
        Err(e) => {
            log::error!("{}", e);
            wasm_bindgen::throw_str(&e.to_string());
        }
    };

    yew::Renderer::<WatchLog>::with_root_and_props(root, WatchLogProps { config }).render();
}
