pub mod parser;

pub use parser::{parse, render_snippet, Parser, SyntaxTree, MAX_NESTING_DEPTH};

#[cfg(test)]
mod tests {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            let _ = Builder::new()
                .is_test(true)
                .filter_level(LevelFilter::Trace)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .try_init();
            log::info!("Test logger initialized");
        });
    }
}

#[cfg(test)]
pub(crate) use tests::init_test_logger;

// Integration tests are in the tests/ directory
