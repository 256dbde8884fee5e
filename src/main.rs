use std::process;
use versioner::cli::Invocation;
use versioner::ui::Printer;

fn main() {
    if let Err(e) = versioner::cli::run() {
        let printer = Printer::new(Invocation::from_env().verbosity());
        printer.error(&format!("Error: {}", e));
        process::exit(1);
    }
}
