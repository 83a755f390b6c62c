use draughts_engine::cli::run_stdio_loop;

fn main() {
    if let Err(err) = run_stdio_loop() {
        eprintln!("io error: {err}");
        std::process::exit(1);
    }
}
