/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CopyToClipboard(String),
}
