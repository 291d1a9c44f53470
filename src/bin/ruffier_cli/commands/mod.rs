// ABOUTME: Subcommand handlers for the Ruffier CLI
// ABOUTME: One module per subcommand

pub mod evaluate;
pub mod table;
