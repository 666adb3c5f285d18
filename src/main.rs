use voidc::driver;

fn main() {
    env_logger::init();

    std::process::exit(driver::run(std::env::args().collect()));
}
