fn main() {
    if let Err(e) = selc_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
