#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    EnterEdit,
    Cancel,
    SaveAndQuit,
    InsertChar(char),
    NewLine,
    DeleteChar,
}
