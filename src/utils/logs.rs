pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // log lines are consumed as json, keep ANSI color codes out of them.
        .with_ansi(false)
        .json()
        .init();
}
