fn main() {
    // All parameters are startup constants; there are no flags to parse.
    let cfg = fermat::search::SweepConfig::default();
    let results = fermat::search::run_sweep(&cfg);
    println!("{results}");
}
