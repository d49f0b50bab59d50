fn main() {
    catalog_path::app::cli::run();
}
