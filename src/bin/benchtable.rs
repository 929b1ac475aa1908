use std::{env, process};

use benchtable::{
    config::{LOG_ENV, ReportConfig},
    report,
};
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", ReportConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match ReportConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", ReportConfig::help());
            process::exit(2);
        }
    };

    match report::run(&config) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
