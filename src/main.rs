fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    turon_site::app::start();
}
