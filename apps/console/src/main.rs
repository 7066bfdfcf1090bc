//! # Tablebook Console Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line flags
//! 2. Initialize tracing (logging to stderr)
//! 3. Load configuration from the environment
//! 4. Open the restaurant (five free tables, fixed menu)
//! 5. Replay the script file, if any
//! 6. Run the interactive prompt until `quit` or end of input

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    tablebook_console::run()
}
