//! Workspace root package. It carries the pre-commit hook configuration only;
//! see `crates/maritime-lib` and `crates/maritime-cli` for the code.
