fn main() {
    std::process::exit(pkgmeta::app::startup::startup());
}
