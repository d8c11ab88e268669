#[ctor::ctor]
fn init() {
    // Logging stays disabled when no configuration file is present.
    let _ = log4rs::init_file("log4rs.yaml", Default::default());
}
