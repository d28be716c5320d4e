fn main() {
    #[cfg(feature = "cli")]
    deoparse::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("deoparse: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
