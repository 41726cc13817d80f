use std::process;

fn main() {
    if let Err(e) = rsa_demo::ui::app::create_app() {
        eprintln!("[-] Error: {:#}", e);
        process::exit(1);
    }
}
