pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod info;

/// Represents a command in the encbase application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
