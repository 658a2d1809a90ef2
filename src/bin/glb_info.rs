//! `glb-info` - inspect the container structure of a glTF binary file
//!
//! Prints the header fields and per-chunk breakdown of a .glb file, with the
//! JSON chunk re-indented for reading.

use craftview_scene::glb::GlbModel;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "models/cube.glb".to_string());

    match GlbModel::load(&path) {
        Ok(model) => {
            println!("file: {}", path);
            print!("{}", model.report());
        }
        Err(e) => {
            log::error!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    }
}
