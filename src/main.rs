fn main() {
    if let Err(err) = ipl_stats::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
