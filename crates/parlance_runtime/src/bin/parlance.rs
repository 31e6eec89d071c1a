//! Interactive extraction shell: `parlance [locale]`.

use parlance_runtime::Repl;

fn main() {
    let locale = std::env::args().nth(1).unwrap_or_else(|| "en".to_string());

    let repl = match Repl::new(&locale) {
        Ok(repl) => repl,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = repl.run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
